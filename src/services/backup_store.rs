//! Archive directory bookkeeping: listing and pruning per-folder backups.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::archive::{BackupEntry, is_archive_of, select_for_pruning, sort_newest_first};

/// Result of a pruning pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    pub removed: Vec<String>,
    /// File name and error for archives that could not be deleted.
    pub failed: Vec<(String, String)>,
}

/// Archives of `folder` in `archive_dir`, newest first. A missing directory has none.
pub fn list_backups(archive_dir: &Path, folder: &str) -> Result<Vec<BackupEntry>, AppError> {
    if !archive_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(archive_dir)?.filter_map(|entry| entry.ok()) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_archive_of(folder, &name) {
            continue;
        }
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            entries.push(BackupEntry { path: entry.path(), modified: metadata.modified()? });
        }
    }
    sort_newest_first(&mut entries);
    Ok(entries)
}

pub fn latest_backup(archive_dir: &Path, folder: &str) -> Result<Option<BackupEntry>, AppError> {
    Ok(list_backups(archive_dir, folder)?.into_iter().next())
}

/// Delete all but the `keep` newest archives of `folder`. `keep == 0` keeps all.
pub fn prune_backups(archive_dir: &Path, folder: &str, keep: usize) -> Result<PruneOutcome, AppError> {
    let mut outcome = PruneOutcome::default();
    for entry in select_for_pruning(list_backups(archive_dir, folder)?, keep) {
        match fs::remove_file(&entry.path) {
            Ok(()) => {
                tracing::info!("removed old archive {}", entry.path.display());
                outcome.removed.push(entry.file_name());
            }
            Err(e) => outcome.failed.push((entry.file_name(), e.to_string())),
        }
    }
    Ok(outcome)
}
