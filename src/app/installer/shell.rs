use std::path::Path;

use chrono::Local;
use ::console::style;

use super::InstallerContext;
use crate::app::console;
use crate::domain::AppError;
use crate::domain::installer::shell_env::{JAVA_PATH_LINE, java_home_cmd, java_home_target};
use crate::ports::ask_yes_no;
use crate::services::shell_rc::{RcUpdate, configure_rc_file, detect_rc_files};

/// Offer to append `JAVA_HOME` and `PATH` exports to each detected rc file.
pub(super) fn configure_shell(
    ctx: &mut InstallerContext<'_>,
    install: &Path,
    latest: Option<&Path>,
) -> Result<(), AppError> {
    let java_home = java_home_target(install, latest, ctx.settings.prefer_latest_link);
    let rc_files = ctx.home.as_deref().map(detect_rc_files).unwrap_or_default();

    if rc_files.is_empty() {
        console::warn("No shell configuration files found");
        println!("Add these lines to your shell configuration:");
        println!("  {}", style(java_home_cmd(&java_home)).green());
        println!("  {}", style(JAVA_PATH_LINE).green());
        return Ok(());
    }

    println!("\n{}", style("Shell configuration files found:").cyan());
    for rc in &rc_files {
        println!("  • {} ({})", rc.label, rc.path.display());
    }

    let today = Local::now().date_naive();
    for rc in &rc_files {
        let file = rc.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let question = format!("Add Java to {} ({})?", rc.label, file);
        match ask_yes_no(&mut *ctx.prompt, &question, false)? {
            None => return Ok(()),
            Some(false) => continue,
            Some(true) => {}
        }

        match configure_rc_file(&rc.path, install, latest, &java_home, today) {
            Ok(RcUpdate::AlreadyConfigured) => {
                console::info(format!("Java is already configured in {}", rc.path.display()));
            }
            Ok(RcUpdate::Appended) => {
                console::success(format!("Added to {}", rc.path.display()));
                console::info(format!("Apply now with: source {}", rc.path.display()));
            }
            Err(e) => console::error(format!("Failed to update {}: {}", rc.path.display(), e)),
        }
    }
    Ok(())
}
