//! Shell rc file discovery and `JAVA_HOME` configuration.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::AppError;
use crate::domain::installer::shell_env::{already_configured, env_config_block};

const RC_FILES: [(&str, &str); 3] = [("Bash", ".bashrc"), ("Zsh", ".zshrc"), ("Profile", ".profile")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcFile {
    pub label: &'static str,
    pub path: PathBuf,
}

/// Existing rc files in `home`, in Bash, Zsh, Profile order.
pub fn detect_rc_files(home: &Path) -> Vec<RcFile> {
    RC_FILES
        .iter()
        .map(|&(label, name)| RcFile { label, path: home.join(name) })
        .filter(|rc| rc.path.is_file())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcUpdate {
    AlreadyConfigured,
    Appended,
}

/// Append the Java block to `rc` unless it already exports this install or its link.
pub fn configure_rc_file(
    rc: &Path,
    install_path: &Path,
    latest_link: Option<&Path>,
    java_home: &Path,
    date: NaiveDate,
) -> Result<RcUpdate, AppError> {
    let bytes = fs::read(rc)?;
    if already_configured(&String::from_utf8_lossy(&bytes), install_path, latest_link) {
        return Ok(RcUpdate::AlreadyConfigured);
    }

    let mut file = OpenOptions::new().append(true).open(rc)?;
    write!(file, "\n{}\n", env_config_block(java_home, date))?;
    Ok(RcUpdate::Appended)
}
