use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const ARCHIVE_EXTENSION: &str = ".zip";

/// An archive already present in the archive directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl BackupEntry {
    pub fn file_name(&self) -> String {
        self.path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

/// `{folder}_{YYYYmmdd_HHMMSS}.zip`
pub fn archive_file_name<Tz: TimeZone>(folder: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}{}", folder, at.format(TIMESTAMP_FORMAT), ARCHIVE_EXTENSION)
}

/// Whether `file_name` is an archive produced for exactly `folder`.
///
/// The timestamp suffix must have the `8 digits _ 6 digits` shape, so the
/// archives of `GTNH_old` are never attributed to `GTNH`.
pub fn is_archive_of(folder: &str, file_name: &str) -> bool {
    let Some(rest) = file_name.strip_prefix(folder) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix('_') else {
        return false;
    };
    let Some(stamp) = rest.strip_suffix(ARCHIVE_EXTENSION) else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit)
}

/// Newest-first ordering by modification time.
pub fn sort_newest_first(entries: &mut [BackupEntry]) {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| b.path.cmp(&a.path)));
}

/// Archives to delete so that only the `keep` newest remain. `keep == 0` keeps all.
pub fn select_for_pruning(mut entries: Vec<BackupEntry>, keep: usize) -> Vec<BackupEntry> {
    if keep == 0 || entries.len() <= keep {
        return Vec::new();
    }
    sort_newest_first(&mut entries);
    entries.split_off(keep)
}
