//! Interactive menu of the modpack folder archiver.

mod archive;
mod list;
mod menu;
mod settings;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::app::console;
use crate::domain::AppError;
use crate::domain::archive::ArchiverSettings;
use crate::ports::Prompt;
use crate::services::TerminalPrompt;
use crate::services::settings_store::{load_settings, save_settings};

/// State of one archiver run: settings and the directory being scanned.
pub struct ArchiverSession {
    settings: ArchiverSettings,
    settings_path: PathBuf,
    work_dir: PathBuf,
}

impl ArchiverSession {
    /// Load settings from `settings_path`; an unreadable file falls back to defaults.
    pub fn load(settings_path: PathBuf, work_dir: PathBuf) -> Self {
        let settings = match load_settings::<ArchiverSettings>(&settings_path) {
            Ok(settings) => settings,
            Err(e) => {
                console::warn(format!("{}. Using default settings", e));
                ArchiverSettings::default()
            }
        };
        Self { settings, settings_path, work_dir }
    }

    pub fn settings(&self) -> &ArchiverSettings {
        &self.settings
    }

    fn save(&self) {
        match save_settings(&self.settings_path, &self.settings) {
            Ok(()) => console::success("Settings saved"),
            Err(e) => console::error(format!("Failed to save settings: {}", e)),
        }
    }

    /// Main menu loop; returns when the user exits or input closes.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<(), AppError> {
        menu::main_loop(self, prompt)
    }
}

/// Diagnostics to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Entry point of the `modpack-archiver` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();
    let settings_path = ArchiverSettings::file_path()?;
    let work_dir = std::env::current_dir()?;

    let mut prompt = TerminalPrompt::new();
    ArchiverSession::load(settings_path, work_dir).run(&mut prompt)
}
