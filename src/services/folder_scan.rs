//! Directory discovery and size accounting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Immediate subdirectories of `dir` whose name starts with `prefix`, sorted by name.
pub fn find_prefixed_folders(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, AppError> {
    let mut folders: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false))
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .map(|entry| entry.path())
        .collect();
    folders.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(folders)
}

/// Total size of regular files below `path`. Unreadable entries are skipped.
pub fn folder_size(path: &Path) -> u64 {
    walk_files(path).iter().filter_map(|file| fs::metadata(file).ok()).map(|meta| meta.len()).sum()
}

/// Number of regular files below `path`.
pub fn count_files(path: &Path) -> usize {
    walk_files(path).len()
}

fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            tracing::debug!("skipping unreadable directory {}", dir.display());
            continue;
        };
        for entry in entries.filter_map(|entry| entry.ok()) {
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => pending.push(entry.path()),
                Ok(kind) if kind.is_file() => files.push(entry.path()),
                _ => {}
            }
        }
    }
    files
}
