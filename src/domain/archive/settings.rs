use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Settings file name, stored directly in the user's home directory.
pub const ARCHIVER_SETTINGS_FILE: &str = ".gtnh_archiver.json";

pub const DEFAULT_PREFIX: &str = "GTNH";
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;
pub const MAX_COMPRESSION_LEVEL: u8 = 9;
pub const DEFAULT_BACKUP_COUNT: u32 = 5;

/// Persisted archiver preferences.
///
/// Missing keys in the settings file fall back to [`Default`], so files written
/// by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiverSettings {
    /// Directory receiving the zip archives.
    pub archive_path: String,
    /// Answer pre-selected when asked whether to delete the source folder.
    pub default_delete: bool,
    /// Include dot-files and dot-directories in archives.
    pub show_hidden: bool,
    /// DEFLATE level, 0 (store) to 9 (smallest).
    pub compression_level: u8,
    /// Folder name prefix scanned for in the working directory.
    pub prefix: String,
    /// Newest archives kept per folder; 0 keeps everything.
    pub backup_count: u32,
}

impl Default for ArchiverSettings {
    fn default() -> Self {
        let archive_path = dirs::home_dir()
            .map(|home| home.join("archives"))
            .unwrap_or_else(|| PathBuf::from("archives"));

        Self {
            archive_path: archive_path.to_string_lossy().into_owned(),
            default_delete: true,
            show_hidden: false,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            prefix: DEFAULT_PREFIX.to_string(),
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl ArchiverSettings {
    /// Location of the settings file under `$HOME`.
    pub fn file_path() -> Result<PathBuf, AppError> {
        dirs::home_dir()
            .map(|home| home.join(ARCHIVER_SETTINGS_FILE))
            .ok_or_else(|| AppError::config_error("Cannot determine home directory"))
    }

    pub fn archive_dir(&self) -> PathBuf {
        PathBuf::from(&self.archive_path)
    }

    pub fn set_compression_level(&mut self, level: i64) -> Result<(), AppError> {
        if !(0..=MAX_COMPRESSION_LEVEL as i64).contains(&level) {
            return Err(AppError::validation(format!(
                "Compression level must be between 0 and {}",
                MAX_COMPRESSION_LEVEL
            )));
        }
        self.compression_level = level as u8;
        Ok(())
    }

    pub fn set_backup_count(&mut self, count: i64) -> Result<(), AppError> {
        let count = u32::try_from(count)
            .map_err(|_| AppError::validation("Backup count must be 0 or greater"))?;
        self.backup_count = count;
        Ok(())
    }

    pub fn set_prefix(&mut self, prefix: &str) -> Result<(), AppError> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(AppError::validation("Prefix must not be empty"));
        }
        self.prefix = prefix.to_string();
        Ok(())
    }

    pub fn set_archive_path(&mut self, path: &str) -> Result<(), AppError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(AppError::validation("Archive path must not be empty"));
        }
        self.archive_path = path.to_string();
        Ok(())
    }
}
