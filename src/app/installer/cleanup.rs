use std::time::SystemTime;

use ::console::style;

use super::InstallerContext;
use crate::app::console;
use crate::domain::AppError;
use crate::domain::units::human_size;
use crate::services::maintenance::{CleanupPolicy, cleanup};

pub(super) fn run_cleanup(ctx: &InstallerContext<'_>) -> Result<(), AppError> {
    let policy = CleanupPolicy::from_settings(&ctx.settings);
    console::info(format!(
        "Cleaning files older than {} days, keeping the newest {} catalog caches",
        policy.cleanup_days, policy.keep_old_cache
    ));

    let report = cleanup(&ctx.settings.cache_path(), &policy, SystemTime::now())?;
    for warning in &report.warnings {
        console::warn(warning);
    }
    if let Some(lines) = report.log_trimmed_from {
        console::info(format!("Log trimmed from {} lines", lines));
    }
    for name in &report.deleted {
        println!("  {} {}", style("🗑️").red(), style(name).dim());
    }

    console::success("Cleanup complete!");
    println!("  {} {}", style("Files deleted:").bold(), style(report.deleted.len()).green());
    println!("  {} {}", style("Files kept:").bold(), style(report.kept).cyan());
    if let Some(size) = report.cache_size {
        println!("  {} {}", style("Current cache size:").bold(), style(human_size(size)).yellow());
    }
    Ok(())
}
