//! Terminal rendering helpers shared by both tools' menus.

mod columns;
mod menu;

pub use columns::{ColumnLayout, MAX_LINE_WIDTH, auto_columns, column_lines, number_width};
pub use menu::{
    BACK_LABEL, Choice, MenuStyle, back_line, choice_prompt, invalid_choice_message, menu_lines,
    parse_choice, release_line, release_lines, trim_line, version_columns, version_items,
};
