use ::console::style;

use super::ArchiverSession;
use super::{archive, list, settings};
use crate::app::console;
use crate::domain::AppError;
use crate::ports::Prompt;

const TITLE: &str = "MODPACK FOLDER ARCHIVER";
pub(super) const CONTINUE: &str = "Press Enter to continue...";
pub(super) const BACK_TO_MENU: &str = "Press Enter to return to the menu...";

pub(super) fn print_header(session: &ArchiverSession, interactive: bool) {
    console::clear_screen(interactive);
    let rule = style("=".repeat(60)).cyan().bold();
    println!("{}", rule);
    println!("{}", style(format!("{:^60}", TITLE)).magenta().bold());
    println!("{}", rule);
    println!("{} {}", style("Current prefix:").yellow(), style(&session.settings.prefix).yellow().bold());
    println!("{} {}", style("Directory:").yellow(), session.work_dir.display());
    println!();
}

pub(super) fn main_loop(session: &mut ArchiverSession, prompt: &mut dyn Prompt) -> Result<(), AppError> {
    loop {
        print_header(session, prompt.is_interactive());
        println!("{}", style("MAIN MENU").green().bold());
        console::thin_separator();
        println!(
            "{} 📋 List folders with prefix '{}'",
            style("1").bold(),
            session.settings.prefix
        );
        println!("{} 📦 Archive a folder", style("2").bold());
        println!("{} ⚙️  Settings", style("3").bold());
        println!("{} 🚪 Exit", style("0").bold());
        console::thin_separator();

        let Some(choice) = prompt.read_line("Select an action [0-3]")? else {
            return Ok(());
        };

        let result = match choice.trim() {
            "0" => {
                println!("\n{}", style("Goodbye! ✅").magenta());
                return Ok(());
            }
            "1" => {
                print_header(session, prompt.is_interactive());
                list::print_folders(session);
                prompt.pause(BACK_TO_MENU)
            }
            "2" => archive::archive_menu(session, prompt),
            "3" => settings::settings_menu(session, prompt),
            _ => {
                console::error("Invalid choice!");
                prompt.pause(CONTINUE)
            }
        };
        if let Err(e) = result {
            console::error(format!("Error: {}", e));
            prompt.pause(CONTINUE)?;
        }
    }
}
