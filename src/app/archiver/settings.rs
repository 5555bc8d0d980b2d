use ::console::style;

use super::ArchiverSession;
use super::menu::{CONTINUE, print_header};
use crate::app::console;
use crate::domain::AppError;
use crate::domain::archive::{ArchiverSettings, MAX_COMPRESSION_LEVEL};
use crate::ports::Prompt;

fn yes_no(value: bool) -> &'static str {
    if value { "✅ Yes" } else { "❌ No" }
}

fn print_settings(session: &ArchiverSession) {
    let settings = &session.settings;
    println!("{}", style("⚙️  SETTINGS").magenta());
    console::thin_separator();

    let rows = [
        ("Archive directory", settings.archive_path.clone()),
        ("Delete folder after archiving by default", yes_no(settings.default_delete).to_string()),
        (
            "Compression level (0-9)",
            format!("{} (0 - store only, 9 - maximum)", settings.compression_level),
        ),
        ("Folder prefix", settings.prefix.clone()),
        ("Archives to keep", format!("{} (0 - keep all)", settings.backup_count)),
        ("Include hidden files", yes_no(settings.show_hidden).to_string()),
    ];
    for (index, (label, value)) in rows.iter().enumerate() {
        println!("{}. {}", index + 1, style(format!("{}:", label)).bold());
        println!("   {}", value);
        println!();
    }

    console::thin_separator();
    println!("{}", style("1-6 - Change a setting").yellow());
    println!("{}", style("0 - ↩️  Back to main menu").yellow());
    println!();
}

pub(super) fn settings_menu(session: &mut ArchiverSession, prompt: &mut dyn Prompt) -> Result<(), AppError> {
    loop {
        print_header(session, prompt.is_interactive());
        print_settings(session);

        let Some(choice) = prompt.read_line("Select a setting to change [0-6]")? else {
            return Ok(());
        };

        match choice.trim() {
            "0" => return Ok(()),
            "1" => {
                let Some(path) = prompt.read_line("New archive directory")? else {
                    return Ok(());
                };
                if !path.trim().is_empty() {
                    apply(session, |s| s.set_archive_path(&path));
                }
            }
            "2" => {
                let current = session.settings.default_delete;
                if let Some(value) = ask_flag(prompt, "Delete after archiving?", current)? {
                    session.settings.default_delete = value;
                    session.save();
                }
            }
            "3" => {
                let current = session.settings.compression_level;
                let question =
                    format!("New compression level (0-{}) [{}]", MAX_COMPRESSION_LEVEL, current);
                if let Some(level) = ask_number(prompt, &question)? {
                    apply(session, |s| s.set_compression_level(level));
                }
            }
            "4" => {
                let current = session.settings.prefix.clone();
                println!("\n{}", style(format!("Current value: {}", current)).cyan());
                let Some(prefix) = prompt.read_line(&format!("New folder prefix [{}]", current))? else {
                    return Ok(());
                };
                if !prefix.trim().is_empty() {
                    apply(session, |s| s.set_prefix(&prefix));
                }
            }
            "5" => {
                let current = session.settings.backup_count;
                let question = format!("Archives to keep (0 - all) [{}]", current);
                if let Some(count) = ask_number(prompt, &question)? {
                    apply(session, |s| s.set_backup_count(count));
                }
            }
            "6" => {
                let current = session.settings.show_hidden;
                if let Some(value) = ask_flag(prompt, "Include hidden files?", current)? {
                    session.settings.show_hidden = value;
                    session.save();
                }
            }
            _ => console::error("Invalid choice!"),
        }
        prompt.pause(CONTINUE)?;
    }
}

/// Apply a validated change and save, or report the validation error.
fn apply(
    session: &mut ArchiverSession,
    change: impl FnOnce(&mut ArchiverSettings) -> Result<(), AppError>,
) {
    match change(&mut session.settings) {
        Ok(()) => session.save(),
        Err(e) => console::error(e),
    }
}

/// `Y`/`N` answer; empty keeps the current value, anything else is reported.
fn ask_flag(prompt: &mut dyn Prompt, question: &str, current: bool) -> Result<Option<bool>, AppError> {
    let label = if current { "Yes" } else { "No" };
    println!("\n{}", style(format!("Current value: {}", label)).cyan());
    let hint = &label[..1];
    let Some(answer) = prompt.read_line(&format!("{} (Y/N) [{}]", question, hint))? else {
        return Ok(None);
    };
    match answer.trim().to_uppercase().as_str() {
        "Y" => Ok(Some(true)),
        "N" => Ok(Some(false)),
        "" => Ok(None),
        _ => {
            console::error("Invalid value!");
            Ok(None)
        }
    }
}

fn ask_number(prompt: &mut dyn Prompt, question: &str) -> Result<Option<i64>, AppError> {
    let Some(answer) = prompt.read_line(question)? else {
        return Ok(None);
    };
    match answer.trim().parse::<i64>() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            console::error("Enter a number!");
            Ok(None)
        }
    }
}
