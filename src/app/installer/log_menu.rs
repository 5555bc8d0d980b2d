use ::console::style;

use super::InstallerContext;
use super::menu::CONTINUE;
use crate::app::console;
use crate::domain::AppError;
use crate::ports::ask_yes_no;
use crate::services::log_file::{TAIL_LINES, clear_log, read_tail};

pub(super) fn log_menu(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    let path = ctx.log_path();
    loop {
        console::clear_screen(ctx.prompt.is_interactive());
        console::heading("📜", "Installer log");

        match read_tail(&path, TAIL_LINES)? {
            Some(tail) => {
                println!(
                    "{}",
                    style(format!("Lines: {} total, last {} shown", tail.total, tail.lines.len())).dim()
                );
                console::thin_separator();
                for line in &tail.lines {
                    println!("{}", line);
                }
            }
            None => console::warn(format!("Log file not found: {}", path.display())),
        }

        console::thin_separator();
        println!("{} Clear log", style("1.").bold());
        println!("{} Back", style("0.").bold());

        let Some(choice) = ctx.prompt.read_line("Select an action [0-1]")? else {
            return Ok(());
        };
        match choice.trim() {
            "0" => return Ok(()),
            "1" => {
                if ask_yes_no(&mut *ctx.prompt, "Clear the log?", false)? == Some(true) {
                    match clear_log(&path) {
                        Ok(()) => console::success("Log cleared"),
                        Err(e) => console::error(format!("Failed to clear log: {}", e)),
                    }
                }
                ctx.prompt.pause(CONTINUE)?;
            }
            _ => {
                console::error("Invalid choice");
                ctx.prompt.pause(CONTINUE)?;
            }
        }
    }
}

/// Print the whole log, for `--show-log`.
pub(super) fn print_full_log(ctx: &InstallerContext<'_>) -> Result<(), AppError> {
    let path = ctx.log_path();
    if !path.is_file() {
        console::warn(format!("Log file not found: {}", path.display()));
        return Ok(());
    }
    console::heading("📜", &format!("Log: {}", path.display()));
    print!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
