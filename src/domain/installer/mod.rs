//! Java installer domain: persisted settings and shell environment snippets.

mod settings;
pub mod shell_env;

pub use settings::{
    CACHE_MAX_AGE_HOURS, INSTALLER_SETTINGS_FILE, InstallerSettings, REQUEST_TIMEOUT_SECS,
    SettingKey, SettingKind, SettingValue, default_cache_dir, default_install_dir,
};
