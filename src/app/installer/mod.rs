//! Interactive installer for BellSoft Liberica Java.

mod catalog;
mod cleanup;
pub mod cli;
mod context;
mod install;
mod log_menu;
mod menu;
mod select;
mod settings_menu;
mod shell;

use std::fs;
use std::path::Path;

use clap::Parser;

pub use cli::Cli;
pub use context::InstallerContext;
pub use select::Selection;

use crate::app::console;
use crate::domain::AppError;
use crate::domain::installer::{
    INSTALLER_SETTINGS_FILE, InstallerSettings, SettingKey, SettingValue, default_cache_dir,
};
use crate::services::log_file::{LOG_FILE_NAME, init_file_logging};
use crate::services::settings_store::{load_settings, save_settings};
use crate::services::{HttpReleaseSource, SystemCommandRunner, TerminalPrompt};

impl<'a> InstallerContext<'a> {
    /// Main menu loop.
    pub fn run(&mut self) -> Result<(), AppError> {
        menu::main_loop(self)
    }
}

/// Load settings from `path`; an unreadable file falls back to defaults.
fn load_or_default(path: &Path) -> InstallerSettings {
    match load_settings::<InstallerSettings>(path) {
        Ok(settings) => settings,
        Err(e) => {
            console::warn(format!("{}. Using default settings", e));
            InstallerSettings::default()
        }
    }
}

/// Fold command-line overrides into `settings`. Returns whether anything changed.
pub fn apply_overrides(
    settings: &mut InstallerSettings,
    cli: &Cli,
    work_dir: &Path,
) -> Result<bool, AppError> {
    let before = settings.clone();

    if cli.work_dir.is_some() {
        settings.cache_dir = work_dir.to_string_lossy().into_owned();
    }
    if let Some(install_dir) = &cli.install_dir {
        settings.set(SettingKey::InstallDir, SettingValue::Text(install_dir.to_string_lossy().into_owned()))?;
    }
    if let Some(timeout) = cli.timeout {
        let timeout = i64::try_from(timeout).unwrap_or(i64::MAX);
        settings.set(SettingKey::Timeout, SettingValue::Integer(timeout))?;
    }
    if cli.offline {
        settings.offline_mode = true;
    }
    if cli.no_color {
        settings.show_colors = false;
    }
    Ok(*settings != before)
}

/// Entry point of the `liberica-install` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let work_dir = cli.work_dir.clone().unwrap_or_else(default_cache_dir);
    let settings_path = work_dir.join(INSTALLER_SETTINGS_FILE);

    let mut settings = load_or_default(&settings_path);
    if apply_overrides(&mut settings, &cli, &work_dir)? {
        save_settings(&settings_path, &settings)?;
    }
    context::apply_colors(settings.show_colors);

    let cache_dir = settings.cache_path();
    fs::create_dir_all(&cache_dir)?;
    init_file_logging(&cache_dir.join(LOG_FILE_NAME))?;

    let source = HttpReleaseSource::public(settings.timeout)?;
    let runner = SystemCommandRunner;
    let mut prompt = TerminalPrompt::new();
    let mut ctx = InstallerContext::new(
        settings,
        settings_path,
        &mut prompt,
        &source,
        &runner,
        dirs::home_dir(),
    );
    run_with(&mut ctx, &cli)
}

/// Handle one-shot flags, or enter the main menu.
pub fn run_with(ctx: &mut InstallerContext<'_>, cli: &Cli) -> Result<(), AppError> {
    if cli.cleanup {
        return cleanup::run_cleanup(ctx);
    }
    if cli.show_log {
        return log_menu::print_full_log(ctx);
    }
    if cli.cache_info {
        if catalog::fetch_catalog(ctx, false)? {
            catalog::show_cache_info(ctx)?;
        }
        return Ok(());
    }
    ctx.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCommandRunner, FakeReleaseSource, ScriptedPrompt, sample_releases};
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["liberica-install"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn overrides_update_settings() {
        let dir = TempDir::new().unwrap();
        let mut settings = InstallerSettings::default();
        let install = dir.path().join("jdks");
        let install_arg = install.to_string_lossy().into_owned();
        let args = cli(&["--work-dir", "/w", "--install-dir", &install_arg, "--timeout", "60", "--offline", "--no-color"]);

        assert!(apply_overrides(&mut settings, &args, Path::new("/w")).unwrap());
        assert_eq!(settings.cache_dir, "/w");
        assert_eq!(settings.install_path(), install);
        assert_eq!(settings.timeout, 60);
        assert!(settings.offline_mode);
        assert!(!settings.show_colors);
    }

    #[test]
    fn no_overrides_change_nothing() {
        let mut settings = InstallerSettings::default();
        let work_dir = settings.cache_path();
        assert!(!apply_overrides(&mut settings, &cli(&[]), &work_dir).unwrap());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut settings = InstallerSettings::default();
        let work_dir = settings.cache_path();
        assert!(apply_overrides(&mut settings, &cli(&["--timeout", "0"]), &work_dir).is_err());
    }

    #[test]
    fn cache_info_flag_fetches_then_returns() {
        let dir = TempDir::new().unwrap();
        let mut prompt = ScriptedPrompt::new(&["0"]);
        let source = FakeReleaseSource::with(sample_releases());
        let runner = FakeCommandRunner::succeeding();
        let settings = InstallerSettings {
            cache_dir: dir.path().to_string_lossy().into_owned(),
            ..InstallerSettings::default()
        };
        {
            let mut ctx = InstallerContext::new(
                settings,
                dir.path().join("settings.json"),
                &mut prompt,
                &source,
                &runner,
                None,
            );
            run_with(&mut ctx, &cli(&["--cache-info"])).unwrap();
        }
        assert_eq!(source.calls(), 1);
        assert_eq!(prompt.remaining(), 1);
    }
}
