use std::path::PathBuf;

use crate::app::console;
use crate::domain::catalog::Release;
use crate::domain::installer::InstallerSettings;
use crate::ports::{CommandRunner, Prompt, ReleaseSource};
use crate::services::CatalogCache;
use crate::services::log_file::LOG_FILE_NAME;
use crate::services::maintenance::DOWNLOADS_DIR;
use crate::services::settings_store::save_settings;

/// Everything one installer session works with.
pub struct InstallerContext<'a> {
    pub(super) settings: InstallerSettings,
    pub(super) settings_path: PathBuf,
    pub(super) prompt: &'a mut dyn Prompt,
    pub(super) source: &'a dyn ReleaseSource,
    pub(super) runner: &'a dyn CommandRunner,
    /// Where shell rc files are looked up.
    pub(super) home: Option<PathBuf>,
    /// Catalog loaded during this session.
    pub(super) catalog: Option<Vec<Release>>,
}

impl<'a> InstallerContext<'a> {
    pub fn new(
        settings: InstallerSettings,
        settings_path: PathBuf,
        prompt: &'a mut dyn Prompt,
        source: &'a dyn ReleaseSource,
        runner: &'a dyn CommandRunner,
        home: Option<PathBuf>,
    ) -> Self {
        Self { settings, settings_path, prompt, source, runner, home, catalog: None }
    }

    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }

    pub(super) fn save_settings(&self) -> bool {
        match save_settings(&self.settings_path, &self.settings) {
            Ok(()) => true,
            Err(e) => {
                console::error(format!("Failed to save settings: {}", e));
                false
            }
        }
    }

    pub(super) fn cache(&self) -> CatalogCache {
        CatalogCache::new(self.settings.cache_path())
    }

    pub(super) fn log_path(&self) -> PathBuf {
        self.settings.cache_path().join(LOG_FILE_NAME)
    }

    pub(super) fn downloads_dir(&self) -> PathBuf {
        self.settings.cache_path().join(DOWNLOADS_DIR)
    }

    pub(super) fn apply_colors(&self) {
        apply_colors(self.settings.show_colors);
    }
}

/// Colors only when enabled and stdout is a terminal.
pub(super) fn apply_colors(show_colors: bool) {
    ::console::set_colors_enabled(show_colors && ::console::user_attended());
}
