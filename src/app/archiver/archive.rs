use std::fs;
use std::path::Path;

use chrono::Local;
use ::console::style;

use super::ArchiverSession;
use super::list::{folder_name, print_list, scan};
use super::menu::{BACK_TO_MENU, CONTINUE, print_header};
use crate::app::console;
use crate::domain::AppError;
use crate::domain::archive::archive_file_name;
use crate::domain::units::format_size;
use crate::ports::Prompt;
use crate::services::backup_store::prune_backups;
use crate::services::zip_archiver::{create_archive, verify_archive};

pub(super) fn archive_menu(session: &mut ArchiverSession, prompt: &mut dyn Prompt) -> Result<(), AppError> {
    let folders = scan(session);
    if folders.is_empty() {
        console::info(format!("No folders with prefix '{}' found.", session.settings.prefix));
        return prompt.pause(CONTINUE);
    }

    print_header(session, prompt.is_interactive());
    println!("{}", style("📦 ARCHIVE A FOLDER").magenta());
    console::thin_separator();
    print_list(session, &folders);

    let question = format!("Select the folder number to archive [1-{}]", folders.len());
    let Some(answer) = prompt.read_line(&question)? else {
        return Ok(());
    };
    match answer.trim().parse::<usize>() {
        Ok(number) if (1..=folders.len()).contains(&number) => {
            archive_folder(session, &folders[number - 1], prompt)?;
        }
        Ok(_) => console::error("Invalid folder number!"),
        Err(_) => console::error("Enter a number!"),
    }
    prompt.pause(BACK_TO_MENU)
}

/// Zip, verify, prune old archives, then offer to delete the source folder.
pub(super) fn archive_folder(
    session: &ArchiverSession,
    folder: &Path,
    prompt: &mut dyn Prompt,
) -> Result<(), AppError> {
    let settings = &session.settings;
    let name = folder_name(folder);
    let archive_dir = settings.archive_dir();
    let destination = archive_dir.join(archive_file_name(&name, &Local::now()));

    println!("{}", style("📦 Creating archive...").blue());
    println!("{}", style(format!("Folder: {}", folder.display())).cyan());
    println!("{}", style(format!("Archive: {}", destination.display())).cyan());
    println!("{}", style(format!("Compression level: {}", settings.compression_level)).cyan());

    let size = match create_archive(folder, &destination, settings.compression_level, settings.show_hidden) {
        Ok(size) => size,
        Err(e) => {
            console::error(format!("Failed to create archive: {}", e));
            discard(&destination);
            return Ok(());
        }
    };
    console::success(format!("Archive created! Size: {}", format_size(size)));

    println!("{}", style("🔍 Verifying archive integrity...").blue());
    if let Err(e) = verify_archive(&destination) {
        console::error(format!("Archive check failed: {}", e));
        console::error("Archive is damaged! The source folder will not be deleted.");
        discard(&destination);
        return Ok(());
    }
    console::success("Archive verified, no damage found!");

    if settings.backup_count > 0 {
        rotate_backups(&archive_dir, &name, settings.backup_count);
    }

    let default = if settings.default_delete { "Y" } else { "N" };
    let Some(answer) = prompt.read_line(&format!("\n🗑️ Delete source folder '{}'? [{}]", name, default))? else {
        return Ok(());
    };
    let answer = answer.trim().to_uppercase();
    let answer = if answer.is_empty() { default.to_string() } else { answer };

    if answer == "Y" {
        match fs::remove_dir_all(folder) {
            Ok(()) => console::success(format!("Folder '{}' deleted!", name)),
            Err(e) => console::error(format!("Failed to delete folder: {}", e)),
        }
    } else {
        println!("{}", style("Folder kept.").yellow());
    }
    Ok(())
}

/// Keep the `keep` newest archives of `name`; failures are reported, never fatal.
fn rotate_backups(archive_dir: &Path, name: &str, keep: u32) {
    let outcome = match prune_backups(archive_dir, name, keep as usize) {
        Ok(outcome) => outcome,
        Err(e) => {
            console::warn(format!("Could not rotate old archives: {}", e));
            return;
        }
    };
    if !outcome.removed.is_empty() || !outcome.failed.is_empty() {
        println!("{}", style(format!("Removing old archives (keeping {} copies)...", keep)).yellow());
    }
    for removed in &outcome.removed {
        println!("{}", style(format!("  Removed: {}", removed)).yellow());
    }
    for (file, error) in &outcome.failed {
        println!("{}", style(format!("  Failed to remove {}: {}", file, error)).red());
    }
}

/// Remove an archive that failed creation or verification, so rotation never counts it.
fn discard(destination: &Path) {
    match fs::remove_file(destination) {
        Ok(()) => console::info(format!("Removed incomplete archive {}", destination.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => console::warn(format!("Could not remove {}: {}", destination.display(), e)),
    }
}
