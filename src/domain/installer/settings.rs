use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const INSTALLER_SETTINGS_FILE: &str = "settings.json";
pub const REQUEST_TIMEOUT_SECS: u64 = 300;
pub const CACHE_MAX_AGE_HOURS: u64 = 24;
const DISPLAY_PATH_LIMIT: usize = 40;

/// Persisted installer preferences, stored in `<cache_dir>/settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerSettings {
    pub install_dir: String,
    pub cache_dir: String,
    pub timeout: u64,
    pub offline_mode: bool,
    pub show_colors: bool,
    pub keep_old_cache: u32,
    pub cleanup_days: u32,
    pub auto_update_cache: bool,
    pub prefer_latest_link: bool,
    pub check_sha1: bool,
    pub download_resume: bool,
    pub show_progress: bool,
    pub max_releases_display: u32,
    pub cache_max_age_hours: u64,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            install_dir: default_install_dir().to_string_lossy().into_owned(),
            cache_dir: default_cache_dir().to_string_lossy().into_owned(),
            timeout: REQUEST_TIMEOUT_SECS,
            offline_mode: false,
            show_colors: true,
            keep_old_cache: 3,
            cleanup_days: 7,
            auto_update_cache: true,
            prefer_latest_link: true,
            check_sha1: true,
            download_resume: true,
            show_progress: true,
            max_releases_display: 20,
            cache_max_age_hours: CACHE_MAX_AGE_HOURS,
        }
    }
}

/// `$TMP/bellsoft-java`
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("bellsoft-java")
}

/// `Java/` next to the executable when that directory is writable, else `~/Java`.
pub fn default_install_dir() -> PathBuf {
    let home_fallback =
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join("Java");

    let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from))
    else {
        return home_fallback();
    };

    let probe = exe_dir.join(".write_test");
    match fs::write(&probe, b"test") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            exe_dir.join("Java")
        }
        Err(_) => home_fallback(),
    }
}

/// Editable settings, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    InstallDir,
    CacheDir,
    Timeout,
    OfflineMode,
    ShowColors,
    KeepOldCache,
    CleanupDays,
    AutoUpdateCache,
    PreferLatestLink,
    CheckSha1,
    DownloadResume,
    ShowProgress,
    MaxReleasesDisplay,
    CacheMaxAgeHours,
}

/// Shape of a setting's value, which decides how the menu asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text,
    Integer,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl SettingKey {
    pub const ALL: [SettingKey; 14] = [
        SettingKey::InstallDir,
        SettingKey::CacheDir,
        SettingKey::Timeout,
        SettingKey::OfflineMode,
        SettingKey::ShowColors,
        SettingKey::KeepOldCache,
        SettingKey::CleanupDays,
        SettingKey::AutoUpdateCache,
        SettingKey::PreferLatestLink,
        SettingKey::CheckSha1,
        SettingKey::DownloadResume,
        SettingKey::ShowProgress,
        SettingKey::MaxReleasesDisplay,
        SettingKey::CacheMaxAgeHours,
    ];

    /// JSON key.
    pub fn key(self) -> &'static str {
        match self {
            SettingKey::InstallDir => "install_dir",
            SettingKey::CacheDir => "cache_dir",
            SettingKey::Timeout => "timeout",
            SettingKey::OfflineMode => "offline_mode",
            SettingKey::ShowColors => "show_colors",
            SettingKey::KeepOldCache => "keep_old_cache",
            SettingKey::CleanupDays => "cleanup_days",
            SettingKey::AutoUpdateCache => "auto_update_cache",
            SettingKey::PreferLatestLink => "prefer_latest_link",
            SettingKey::CheckSha1 => "check_sha1",
            SettingKey::DownloadResume => "download_resume",
            SettingKey::ShowProgress => "show_progress",
            SettingKey::MaxReleasesDisplay => "max_releases_display",
            SettingKey::CacheMaxAgeHours => "cache_max_age_hours",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SettingKey::InstallDir => "Install directory",
            SettingKey::CacheDir => "Cache directory",
            SettingKey::Timeout => "Request timeout (sec)",
            SettingKey::OfflineMode => "Offline mode",
            SettingKey::ShowColors => "Colored output",
            SettingKey::KeepOldCache => "Catalog caches to keep",
            SettingKey::CleanupDays => "Delete files older than (days)",
            SettingKey::AutoUpdateCache => "Auto-refresh cache",
            SettingKey::PreferLatestLink => "Use 'latest' link",
            SettingKey::CheckSha1 => "Verify SHA1",
            SettingKey::DownloadResume => "Resume downloads",
            SettingKey::ShowProgress => "Show progress",
            SettingKey::MaxReleasesDisplay => "Max releases shown",
            SettingKey::CacheMaxAgeHours => "Cache refresh age (hours)",
        }
    }

    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::InstallDir | SettingKey::CacheDir => SettingKind::Text,
            SettingKey::Timeout
            | SettingKey::KeepOldCache
            | SettingKey::CleanupDays
            | SettingKey::MaxReleasesDisplay
            | SettingKey::CacheMaxAgeHours => SettingKind::Integer,
            _ => SettingKind::Flag,
        }
    }
}

impl InstallerSettings {
    pub fn value(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::InstallDir => SettingValue::Text(self.install_dir.clone()),
            SettingKey::CacheDir => SettingValue::Text(self.cache_dir.clone()),
            SettingKey::Timeout => SettingValue::Integer(self.timeout as i64),
            SettingKey::OfflineMode => SettingValue::Flag(self.offline_mode),
            SettingKey::ShowColors => SettingValue::Flag(self.show_colors),
            SettingKey::KeepOldCache => SettingValue::Integer(self.keep_old_cache.into()),
            SettingKey::CleanupDays => SettingValue::Integer(self.cleanup_days.into()),
            SettingKey::AutoUpdateCache => SettingValue::Flag(self.auto_update_cache),
            SettingKey::PreferLatestLink => SettingValue::Flag(self.prefer_latest_link),
            SettingKey::CheckSha1 => SettingValue::Flag(self.check_sha1),
            SettingKey::DownloadResume => SettingValue::Flag(self.download_resume),
            SettingKey::ShowProgress => SettingValue::Flag(self.show_progress),
            SettingKey::MaxReleasesDisplay => {
                SettingValue::Integer(self.max_releases_display.into())
            }
            SettingKey::CacheMaxAgeHours => SettingValue::Integer(self.cache_max_age_hours as i64),
        }
    }

    /// Validate and apply a new value. The settings are unchanged on error.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), AppError> {
        match (key, value) {
            (SettingKey::InstallDir, SettingValue::Text(text)) => {
                self.install_dir = non_empty(key, text)?;
            }
            (SettingKey::CacheDir, SettingValue::Text(text)) => {
                self.cache_dir = non_empty(key, text)?;
            }
            (SettingKey::Timeout, SettingValue::Integer(n)) => {
                if n < 1 {
                    return Err(AppError::validation("Timeout must be at least 1 second"));
                }
                self.timeout = n as u64;
            }
            (SettingKey::KeepOldCache, SettingValue::Integer(n)) => {
                if n < 1 {
                    return Err(AppError::validation("At least 1 catalog cache must be kept"));
                }
                self.keep_old_cache = to_u32(key, n)?;
            }
            (SettingKey::CleanupDays, SettingValue::Integer(n)) => {
                if n < 0 {
                    return Err(AppError::validation("Number of days cannot be negative"));
                }
                self.cleanup_days = to_u32(key, n)?;
            }
            (SettingKey::MaxReleasesDisplay, SettingValue::Integer(n)) => {
                self.max_releases_display = to_u32(key, n)?;
            }
            (SettingKey::CacheMaxAgeHours, SettingValue::Integer(n)) => {
                self.cache_max_age_hours = to_u32(key, n)?.into();
            }
            (SettingKey::OfflineMode, SettingValue::Flag(b)) => self.offline_mode = b,
            (SettingKey::ShowColors, SettingValue::Flag(b)) => self.show_colors = b,
            (SettingKey::AutoUpdateCache, SettingValue::Flag(b)) => self.auto_update_cache = b,
            (SettingKey::PreferLatestLink, SettingValue::Flag(b)) => self.prefer_latest_link = b,
            (SettingKey::CheckSha1, SettingValue::Flag(b)) => self.check_sha1 = b,
            (SettingKey::DownloadResume, SettingValue::Flag(b)) => self.download_resume = b,
            (SettingKey::ShowProgress, SettingValue::Flag(b)) => self.show_progress = b,
            (key, value) => {
                return Err(AppError::validation(format!(
                    "Value {:?} does not fit setting '{}'",
                    value,
                    key.key()
                )));
            }
        }
        Ok(())
    }

    /// Menu rendering of a setting's current value.
    pub fn format_value(&self, key: SettingKey) -> String {
        match self.value(key) {
            SettingValue::Flag(true) => "✅ On".to_string(),
            SettingValue::Flag(false) => "❌ Off".to_string(),
            SettingValue::Integer(n) => n.to_string(),
            SettingValue::Text(text) => shorten_path(&text),
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(&self.cache_dir)
    }

    pub fn install_path(&self) -> PathBuf {
        PathBuf::from(&self.install_dir)
    }
}

fn non_empty(key: SettingKey, text: String) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", key.display_name())));
    }
    Ok(trimmed.to_string())
}

fn to_u32(key: SettingKey, n: i64) -> Result<u32, AppError> {
    u32::try_from(n).map_err(|_| {
        AppError::validation(format!("{} must be between 0 and {}", key.display_name(), u32::MAX))
    })
}

fn shorten_path(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= DISPLAY_PATH_LIMIT {
        return text.to_string();
    }
    let tail: String = chars[chars.len() - (DISPLAY_PATH_LIMIT - 3)..].iter().collect();
    format!("...{}", tail)
}
