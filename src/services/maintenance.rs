//! Age-based cleanup of the installer's cache directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use super::folder_scan::folder_size;
use super::log_file::{KEEP_LINES, LOG_FILE_NAME, MAX_LOG_BYTES, trim_log};
use crate::domain::AppError;
use crate::domain::catalog::is_cache_file;
use crate::domain::installer::InstallerSettings;

pub const DOWNLOADS_DIR: &str = "downloads";
pub const SETTINGS_BACKUP_PREFIX: &str = "settings-backup-";

const DAY_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupPolicy {
    pub cleanup_days: u32,
    /// Newest catalog caches that are never deleted.
    pub keep_old_cache: u32,
}

impl CleanupPolicy {
    pub fn from_settings(settings: &InstallerSettings) -> Self {
        Self { cleanup_days: settings.cleanup_days, keep_old_cache: settings.keep_old_cache }
    }

    fn cutoff(&self, now: SystemTime) -> SystemTime {
        now.checked_sub(Duration::from_secs(u64::from(self.cleanup_days) * DAY_SECS))
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// File names removed, relative to the cache directory.
    pub deleted: Vec<String>,
    pub kept: usize,
    /// Line count before the log was trimmed.
    pub log_trimmed_from: Option<usize>,
    pub warnings: Vec<String>,
    /// Cache directory size after cleanup, measured only when something was deleted.
    pub cache_size: Option<u64>,
}

/// Delete downloads, catalog caches and settings backups older than the policy allows.
pub fn cleanup(
    cache_dir: &Path,
    policy: &CleanupPolicy,
    now: SystemTime,
) -> Result<CleanupReport, AppError> {
    let cutoff = policy.cutoff(now);
    let mut report = CleanupReport::default();

    let downloads = cache_dir.join(DOWNLOADS_DIR);
    for (path, modified) in files_with_mtime(&downloads, |_| true)? {
        if modified < cutoff {
            remove(&path, &format!("{}/{}", DOWNLOADS_DIR, name_of(&path)), &mut report);
        } else {
            report.kept += 1;
        }
    }

    let log = cache_dir.join(LOG_FILE_NAME);
    if let Ok(metadata) = fs::metadata(&log) {
        let stale = metadata.modified().map(|m| m < cutoff).unwrap_or(false);
        if stale || metadata.len() > MAX_LOG_BYTES {
            match trim_log(&log, KEEP_LINES) {
                Ok(trimmed) => report.log_trimmed_from = trimmed,
                Err(e) => report.warnings.push(format!("{}: {}", LOG_FILE_NAME, e)),
            }
        }
    }

    let mut caches = files_with_mtime(cache_dir, is_cache_file)?;
    caches.sort_by(|a, b| b.1.cmp(&a.1));
    for (index, (path, modified)) in caches.into_iter().enumerate() {
        if index >= policy.keep_old_cache as usize && modified < cutoff {
            remove(&path, &name_of(&path), &mut report);
        } else {
            report.kept += 1;
        }
    }

    let is_backup = |name: &str| name.starts_with(SETTINGS_BACKUP_PREFIX) && name.ends_with(".json");
    for (path, modified) in files_with_mtime(cache_dir, is_backup)? {
        if modified < cutoff {
            remove(&path, &name_of(&path), &mut report);
        }
    }

    if !report.deleted.is_empty() {
        report.cache_size = Some(folder_size(cache_dir));
    }
    Ok(report)
}

fn files_with_mtime(
    dir: &Path,
    accept: impl Fn(&str) -> bool,
) -> Result<Vec<(PathBuf, SystemTime)>, AppError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() || !accept(&entry.file_name().to_string_lossy()) {
            continue;
        }
        files.push((entry.path(), metadata.modified()?));
    }
    Ok(files)
}

fn remove(path: &Path, label: &str, report: &mut CleanupReport) {
    match fs::remove_file(path) {
        Ok(()) => report.deleted.push(label.to_string()),
        Err(e) => report.warnings.push(format!("{}: {}", label, e)),
    }
}

fn name_of(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    const WEEK: Duration = Duration::from_secs(7 * DAY_SECS);

    fn policy() -> CleanupPolicy {
        CleanupPolicy { cleanup_days: 7, keep_old_cache: 1 }
    }

    fn write_aged(path: &Path, content: &str, age: Duration, now: SystemTime) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        File::options().write(true).open(path).unwrap().set_modified(now - age).unwrap();
    }

    #[test]
    fn old_downloads_go_recent_ones_stay() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        write_aged(&dir.path().join("downloads/old.tar.gz"), "x", WEEK * 2, now);
        write_aged(&dir.path().join("downloads/new.tar.gz"), "x", Duration::from_secs(60), now);

        let report = cleanup(dir.path(), &policy(), now).unwrap();
        assert_eq!(report.deleted, vec!["downloads/old.tar.gz"]);
        assert_eq!(report.kept, 1);
        assert!(report.cache_size.is_some());
        assert!(dir.path().join("downloads/new.tar.gz").exists());
    }

    #[test]
    fn newest_caches_survive_even_when_old() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        write_aged(&dir.path().join("api-cache-20240101_000000.json"), "[]", WEEK * 4, now);
        write_aged(&dir.path().join("api-cache-20240201_000000.json"), "[]", WEEK * 3, now);
        write_aged(&dir.path().join("api-cache-20240301_000000.json"), "[]", WEEK * 2, now);

        let report = cleanup(dir.path(), &policy(), now).unwrap();
        let mut deleted = report.deleted.clone();
        deleted.sort();
        assert_eq!(
            deleted,
            vec!["api-cache-20240101_000000.json", "api-cache-20240201_000000.json"]
        );
        assert!(dir.path().join("api-cache-20240301_000000.json").exists());
    }

    #[test]
    fn recent_caches_beyond_keep_are_kept() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        write_aged(&dir.path().join("api-cache-20240101_000000.json"), "[]", Duration::from_secs(120), now);
        write_aged(&dir.path().join("api-cache-20240102_000000.json"), "[]", Duration::from_secs(60), now);

        let report = cleanup(dir.path(), &policy(), now).unwrap();
        assert!(report.deleted.is_empty());
        assert_eq!(report.kept, 2);
        assert_eq!(report.cache_size, None);
    }

    #[test]
    fn stale_log_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        let lines: String = (0..1500).map(|n| format!("{}\n", n)).collect();
        write_aged(&dir.path().join(LOG_FILE_NAME), &lines, WEEK * 2, now);

        let report = cleanup(dir.path(), &policy(), now).unwrap();
        assert_eq!(report.log_trimmed_from, Some(1500));
        let content = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content.lines().count(), KEEP_LINES);
    }

    #[test]
    fn old_settings_backups_are_deleted() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        write_aged(&dir.path().join("settings-backup-20240101_000000.json"), "{}", WEEK * 2, now);
        write_aged(&dir.path().join("settings.json"), "{}", WEEK * 2, now);

        let report = cleanup(dir.path(), &policy(), now).unwrap();
        assert_eq!(report.deleted, vec!["settings-backup-20240101_000000.json"]);
        assert!(dir.path().join("settings.json").exists());
    }

    #[test]
    fn zero_days_deletes_everything_older_than_now() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        write_aged(&dir.path().join("downloads/a.zip"), "x", Duration::from_secs(5), now);

        let policy = CleanupPolicy { cleanup_days: 0, keep_old_cache: 1 };
        let report = cleanup(dir.path(), &policy, now).unwrap();
        assert_eq!(report.deleted, vec!["downloads/a.zip"]);
    }

    #[test]
    fn missing_cache_dir_is_empty_report() {
        let dir = TempDir::new().unwrap();
        let report = cleanup(&dir.path().join("absent"), &policy(), SystemTime::now()).unwrap();
        assert_eq!(report, CleanupReport::default());
    }
}
