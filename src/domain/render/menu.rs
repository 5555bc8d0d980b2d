//! Numbered menus and choice parsing.

use console::style;

use super::columns::{
    MAX_LINE_WIDTH, NUMBER_SEPARATOR, auto_columns, column_lines, number_width, styled_number,
};
use crate::domain::catalog::Release;
use crate::domain::units::human_size;

pub const BACK_LABEL: &str = "Back/Exit";
const TRIM_LIMIT: usize = 100;
const TRIM_KEEP: usize = 97;
const MULTI_COLUMN_MIN_ITEMS: usize = 10;

/// Cut lines longer than 100 characters down to 97 plus `...`.
pub fn trim_line(text: &str) -> String {
    if text.chars().count() > TRIM_LIMIT {
        let kept: String = text.chars().take(TRIM_KEEP).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

/// Options for rendering a numbered menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuStyle {
    /// Column count; `None` picks one from the item count.
    pub columns: Option<usize>,
    pub trim_long_lines: bool,
    pub allow_back: bool,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self { columns: None, trim_long_lines: true, allow_back: true }
    }
}

/// Body lines of a numbered menu, including the `0` line when back is allowed.
pub fn menu_lines(items: &[String], menu: MenuStyle) -> Vec<String> {
    let columns = menu.columns.unwrap_or_else(|| auto_columns(items.len()));
    let width = number_width(items.len());

    let mut lines = if columns > 1 && items.len() > MULTI_COLUMN_MIN_ITEMS {
        column_lines(items, columns, MAX_LINE_WIDTH)
    } else {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let text = if menu.trim_long_lines { trim_line(item) } else { item.clone() };
                format!("{}{}{}", styled_number(index + 1, width), NUMBER_SEPARATOR, text)
            })
            .collect()
    };

    if menu.allow_back {
        lines.push(back_line(items.len()));
    }
    lines
}

pub fn back_line(count: usize) -> String {
    format!(
        "{}{}{}",
        styled_number(0, number_width(count)),
        NUMBER_SEPARATOR,
        style(BACK_LABEL).bold()
    )
}

/// Result of parsing one line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Back,
    /// Zero-based item index.
    Item(usize),
    Invalid,
}

pub fn parse_choice(input: &str, count: usize, allow_back: bool) -> Choice {
    let input = input.trim();
    if input == "0" && allow_back {
        return Choice::Back;
    }
    match input.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Choice::Item(number - 1),
        _ => Choice::Invalid,
    }
}

pub fn choice_prompt(count: usize, allow_back: bool) -> String {
    if allow_back {
        format!("Select number [0-{}]", count)
    } else {
        format!("Select number [{}]", count)
    }
}

pub fn invalid_choice_message(count: usize, allow_back: bool) -> String {
    format!(
        "Invalid choice. Enter a number from {} to {}",
        if allow_back { 0 } else { 1 },
        count
    )
}

/// Columns for the Java version picker; `None` keeps a single column.
pub fn version_columns(count: usize) -> Option<usize> {
    match count {
        0..=MULTI_COLUMN_MIN_ITEMS => None,
        11..=20 => Some(2),
        21..=40 => Some(3),
        _ => Some(4),
    }
}

pub fn version_items(versions: &[String]) -> Vec<String> {
    versions.iter().map(|version| format!("Java {}", version)).collect()
}

/// `{version:<15} | {size:>10} | {status} | {filename}`
pub fn release_line(release: &Release) -> String {
    let status = if release.lts || release.ga {
        style(release.status_label()).magenta()
    } else {
        style(release.status_label()).yellow()
    };
    format!(
        "{} | {} | {} | {}",
        style(format!("{:<15}", release.version)).cyan(),
        style(format!("{:>10}", human_size(release.size))).yellow(),
        status,
        style(&release.filename).dim()
    )
}

/// Release lines for the newest `limit` releases.
pub fn release_lines(releases: &[&Release], limit: usize) -> Vec<String> {
    releases.iter().take(limit).map(|release| release_line(release)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &str) -> String {
        console::strip_ansi_codes(line).into_owned()
    }

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("option {}", n)).collect()
    }

    #[test]
    fn short_menus_are_single_column_with_back_line() {
        let lines: Vec<String> = menu_lines(&items(3), MenuStyle::default())
            .iter()
            .map(|line| plain(line))
            .collect();
        assert_eq!(lines, vec!["1 │ option 1", "2 │ option 2", "3 │ option 3", "0 │ Back/Exit"]);
    }

    #[test]
    fn ten_items_stay_single_column() {
        let lines = menu_lines(&items(10), MenuStyle { allow_back: false, ..MenuStyle::default() });
        assert_eq!(lines.len(), 10);
        assert_eq!(plain(&lines[0]), " 1 │ option 1");
    }

    #[test]
    fn long_menus_use_columns() {
        let lines = menu_lines(&items(12), MenuStyle { allow_back: false, ..MenuStyle::default() });
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn long_lines_trimmed_only_when_enabled() {
        let long = vec!["z".repeat(120)];
        let trimmed = menu_lines(&long, MenuStyle { allow_back: false, ..MenuStyle::default() });
        assert_eq!(plain(&trimmed[0]), format!("1 │ {}...", "z".repeat(97)));

        let kept = menu_lines(
            &long,
            MenuStyle { allow_back: false, trim_long_lines: false, ..MenuStyle::default() },
        );
        assert_eq!(plain(&kept[0]), format!("1 │ {}", "z".repeat(120)));
    }

    #[test]
    fn trim_line_leaves_exactly_100_chars() {
        let line = "a".repeat(100);
        assert_eq!(trim_line(&line), line);
        assert_eq!(trim_line(&"a".repeat(101)).chars().count(), 100);
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(parse_choice("0", 3, true), Choice::Back);
        assert_eq!(parse_choice("0", 3, false), Choice::Invalid);
        assert_eq!(parse_choice(" 2 ", 3, true), Choice::Item(1));
        assert_eq!(parse_choice("4", 3, true), Choice::Invalid);
        assert_eq!(parse_choice("abc", 3, true), Choice::Invalid);
        assert_eq!(parse_choice("-1", 3, true), Choice::Invalid);
    }

    #[test]
    fn version_picker_columns() {
        assert_eq!(version_columns(10), None);
        assert_eq!(version_columns(11), Some(2));
        assert_eq!(version_columns(20), Some(2));
        assert_eq!(version_columns(40), Some(3));
        assert_eq!(version_columns(41), Some(4));
        assert_eq!(version_items(&["21".to_string()]), vec!["Java 21"]);
    }

    #[test]
    fn release_line_layout() {
        let release = Release {
            version: "21.0.2+14".into(),
            filename: "bellsoft-jdk21.0.2+14-linux-amd64.tar.gz".into(),
            size: 1536,
            lts: true,
            ..Release::default()
        };
        assert_eq!(
            plain(&release_line(&release)),
            "21.0.2+14       |     1.5 KB | LTS | bellsoft-jdk21.0.2+14-linux-amd64.tar.gz"
        );

        let stable = Release { version: "22".into(), ..Release::default() };
        assert!(plain(&release_line(&stable)).contains("| Stable |"));
    }

    #[test]
    fn release_lines_respect_limit() {
        let releases: Vec<Release> = (0..5)
            .map(|n| Release { version: format!("21.0.{}", n), ..Release::default() })
            .collect();
        let refs: Vec<&Release> = releases.iter().collect();
        assert_eq!(release_lines(&refs, 3).len(), 3);
    }
}
