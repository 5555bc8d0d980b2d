use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ::console::style;

use super::ArchiverSession;
use crate::app::console;
use crate::domain::units::format_size;
use crate::services::backup_store::latest_backup;
use crate::services::folder_scan::{find_prefixed_folders, folder_size};

/// Prefixed folders of the working directory; an unreadable directory has none.
pub(super) fn scan(session: &ArchiverSession) -> Vec<PathBuf> {
    match find_prefixed_folders(&session.work_dir, &session.settings.prefix) {
        Ok(folders) => folders,
        Err(e) => {
            console::error(format!("Cannot access directory: {}", e));
            Vec::new()
        }
    }
}

pub(super) fn print_folders(session: &ArchiverSession) {
    print_list(session, &scan(session));
}

pub(super) fn print_list(session: &ArchiverSession, folders: &[PathBuf]) {
    if folders.is_empty() {
        console::info(format!("No folders with prefix '{}' found.", session.settings.prefix));
        println!("{} {}", style("Current directory:").yellow(), session.work_dir.display());
        return;
    }

    println!("{}", style(format!("📋 Folders found: {}", folders.len())).green());
    console::thin_separator();

    let archive_dir = session.settings.archive_dir();
    for (index, folder) in folders.iter().enumerate() {
        let name = folder_name(folder);
        let modified = match fs::metadata(folder).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => {
                println!("{}", style(format!("{:3}. ❌ {} - access error", index + 1, name)).red());
                println!();
                continue;
            }
        };

        println!("{} 📁 {}", style(format!("{:3}.", index + 1)).bold(), name);
        println!("     📏 Size: {}", format_size(folder_size(folder)));
        println!(
            "     📅 Modified: {}",
            DateTime::<Local>::from(modified).format("%d.%m.%Y %H:%M")
        );
        println!("     📍 Path: {}", folder.display());
        if let Ok(Some(latest)) = latest_backup(&archive_dir, &name) {
            println!("     📦 Latest archive: {}", latest.file_name());
        }
        println!();
    }
}

pub(super) fn folder_name(folder: &Path) -> String {
    folder.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
