//! Status lines shared by both tools.
//!
//! Every status line is printed with its emoji and also emitted as a
//! `tracing` event with a plain-text tag, which the installer routes to its
//! log file.

use std::fmt::Display;

use console::{StyledObject, style};

const SEPARATOR_WIDTH: usize = 60;

fn plain(message: &str) -> String {
    console::strip_ansi_codes(message).into_owned()
}

pub fn success(message: impl Display) {
    let message = message.to_string();
    println!("{} {}", style("✅").green(), message);
    tracing::info!("[OK] {}", plain(&message));
}

pub fn warn(message: impl Display) {
    let message = message.to_string();
    println!("{} {}", style("⚠️").yellow(), message);
    tracing::info!("[WARN] {}", plain(&message));
}

pub fn error(message: impl Display) {
    let message = message.to_string();
    println!("{} {}", style("❌").red(), message);
    tracing::info!("[ERR] {}", plain(&message));
}

pub fn info(message: impl Display) {
    let message = message.to_string();
    println!("{} {}", style("ℹ️").cyan(), message);
    tracing::info!("[INFO] {}", plain(&message));
}

pub fn download(message: impl Display) {
    let message = message.to_string();
    println!("{} {}", style("📥").blue(), message);
    tracing::info!("[DL] {}", plain(&message));
}

pub fn separator() {
    println!("{}", style("=".repeat(SEPARATOR_WIDTH)).dim());
}

pub fn thin_separator() {
    println!("{}", style("─".repeat(SEPARATOR_WIDTH)).cyan());
}

/// Separator, `{emoji} {title}`, separator.
pub fn heading(emoji: &str, title: &str) {
    separator();
    println!("{} {}", style(emoji).magenta(), style(title).bold().cyan());
    separator();
}

/// `Label:` padded to `width`, then the value.
pub fn field<D: Display>(label: &str, width: usize, value: StyledObject<D>) {
    let label = format!("{}:", label);
    println!("{} {}", style(format!("{:<width$}", label, width = width)).bold(), value);
}

pub fn clear_screen(interactive: bool) {
    if interactive {
        let _ = console::Term::stdout().clear_screen();
    }
}
