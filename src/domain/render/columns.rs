//! Column-major layout of numbered items.

use console::{measure_text_width, style};

pub const MAX_LINE_WIDTH: usize = 80;

const COLUMN_GAP: &str = "   ";
const TEXT_PADDING: usize = 2;
pub(crate) const NUMBER_SEPARATOR: &str = " │ ";

/// Column count for a list of `count` items.
pub fn auto_columns(count: usize) -> usize {
    match count {
        0..=5 => 1,
        6..=15 => 2,
        16..=30 => 3,
        _ => 4,
    }
}

/// Digits needed for the largest item number.
pub fn number_width(count: usize) -> usize {
    count.max(1).to_string().len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: usize,
    pub rows: usize,
    pub number_width: usize,
    pub text_width: usize,
}

impl ColumnLayout {
    /// Fit `requested` columns of `items` into `max_width` terminal cells.
    pub fn fit(items: &[String], requested: usize, max_width: usize) -> Self {
        let number_width = number_width(items.len());
        let text_width =
            items.iter().map(|item| measure_text_width(item)).max().unwrap_or(0) + TEXT_PADDING;
        let column_width = number_width + text_width + NUMBER_SEPARATOR.chars().count();

        let mut columns = requested.max(1);
        let total = column_width * columns + (columns - 1) * COLUMN_GAP.len();
        if total > max_width && columns > 1 {
            columns = (max_width / (column_width + COLUMN_GAP.len())).max(1);
        }

        let rows = items.len().div_ceil(columns);
        Self { columns, rows, number_width, text_width }
    }

    /// Index of the item shown at `row`, `col`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row + col * self.rows
    }
}

pub(crate) fn styled_number(number: usize, width: usize) -> String {
    style(format!("{:>width$}", number, width = width)).yellow().to_string()
}

/// Cyan unless the item already carries its own styling.
fn styled_text(item: &str) -> String {
    if console::strip_ansi_codes(item).len() == item.len() {
        style(item).cyan().to_string()
    } else {
        item.to_string()
    }
}

/// Render `items` numbered from 1, laid out column-major.
pub fn column_lines(items: &[String], requested: usize, max_width: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let layout = ColumnLayout::fit(items, requested, max_width);

    (0..layout.rows)
        .map(|row| {
            let cells: Vec<String> = (0..layout.columns)
                .map(|col| layout.index(row, col))
                .filter(|&index| index < items.len())
                .map(|index| {
                    let item = &items[index];
                    let padding = layout.text_width.saturating_sub(measure_text_width(item));
                    format!(
                        "{}{}{}{}",
                        styled_number(index + 1, layout.number_width),
                        NUMBER_SEPARATOR,
                        styled_text(item),
                        " ".repeat(padding)
                    )
                })
                .collect();
            cells.join(COLUMN_GAP).trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("item-{}", n)).collect()
    }

    fn plain(lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| console::strip_ansi_codes(line).into_owned()).collect()
    }

    #[test]
    fn auto_columns_thresholds() {
        assert_eq!(auto_columns(5), 1);
        assert_eq!(auto_columns(6), 2);
        assert_eq!(auto_columns(15), 2);
        assert_eq!(auto_columns(16), 3);
        assert_eq!(auto_columns(30), 3);
        assert_eq!(auto_columns(31), 4);
    }

    #[test]
    fn layout_is_column_major() {
        let lines = plain(&column_lines(&names(12), 2, MAX_LINE_WIDTH));
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with(" 1 │ item-1"));
        assert!(lines[0].contains(" 7 │ item-7"));
        assert!(lines[5].contains("12 │ item-12"));
    }

    #[test]
    fn wide_items_reduce_columns() {
        let items: Vec<String> = (1..=12).map(|n| format!("{:-<30}{}", "x", n)).collect();
        let layout = ColumnLayout::fit(&items, 4, MAX_LINE_WIDTH);
        // column width = 2 + 34 + 3
        assert_eq!(layout.columns, MAX_LINE_WIDTH / (39 + 3));
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 12);
    }

    #[test]
    fn ansi_codes_do_not_count_towards_width() {
        let colored = vec![style("Java 21").green().to_string(), "Java 17".to_string()];
        let layout = ColumnLayout::fit(&colored, 2, MAX_LINE_WIDTH);
        assert_eq!(layout.text_width, "Java 21".len() + 2);
    }

    #[test]
    fn lines_have_no_trailing_padding() {
        for line in plain(&column_lines(&names(20), 3, MAX_LINE_WIDTH)) {
            assert_eq!(line, line.trim_end());
        }
    }

    proptest! {
        #[test]
        fn every_item_rendered_once(count in 1usize..80, requested in 1usize..6) {
            let items = names(count);
            let text = plain(&column_lines(&items, requested, MAX_LINE_WIDTH)).join("\n");
            for n in 1..=count {
                let cell = format!("│ item-{}", n);
                let occurrences = text
                    .match_indices(&cell)
                    .filter(|(at, _)| {
                        let rest = &text[at + cell.len()..];
                        !rest.starts_with(|c: char| c.is_ascii_digit())
                    })
                    .count();
                prop_assert_eq!(occurrences, 1);
            }
        }

        #[test]
        fn fitted_layout_stays_within_width(count in 1usize..80, len in 1usize..60) {
            let items: Vec<String> = (0..count).map(|_| "y".repeat(len)).collect();
            let layout = ColumnLayout::fit(&items, 4, MAX_LINE_WIDTH);
            prop_assert!(layout.columns >= 1);
            prop_assert!(layout.rows * layout.columns >= count);
            if layout.columns > 1 {
                let column_width = layout.number_width + layout.text_width + 3;
                prop_assert!(column_width * layout.columns + (layout.columns - 1) * 3 <= MAX_LINE_WIDTH);
            }
        }
    }
}
