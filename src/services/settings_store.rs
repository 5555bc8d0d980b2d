//! JSON settings persistence shared by both tools.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::AppError;

/// Load settings from `path`, merging stored keys over defaults.
///
/// A missing file yields the defaults. Unknown keys are ignored.
pub fn load_settings<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::SettingsParse {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Write settings to `path` as pretty-printed JSON, creating parent directories.
pub fn save_settings<T: Serialize>(path: &Path, settings: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(path, content + "\n")?;
    Ok(())
}
