use ::console::style;

use super::InstallerContext;
use crate::app::console;
use crate::domain::AppError;
use crate::domain::units::{format_age, human_size};
use crate::services::{CachePolicy, CatalogOrigin};

/// Load the catalog into the session; `force` skips the cache age check.
///
/// Failures are reported to the user and yield `false`.
pub(super) fn fetch_catalog(ctx: &mut InstallerContext<'_>, force: bool) -> Result<bool, AppError> {
    let cache = ctx.cache();
    let policy = CachePolicy::from_settings(&ctx.settings);

    if !force && !policy.offline {
        console::info("Checking catalog cache...");
    }
    if force && !policy.offline {
        console::download(format!("Requesting releases from {}", ctx.source.describe()));
    }

    let loaded = match cache.fetch(ctx.source, &policy, force) {
        Ok(loaded) => loaded,
        Err(e) => {
            console::error(e);
            return Ok(false);
        }
    };

    match &loaded.origin {
        CatalogOrigin::Cached { age, .. } => {
            console::success(format!("Using cached data ({} minutes ago)", age.as_secs() / 60));
        }
        CatalogOrigin::Offline { label } => {
            console::warn(format!("Offline mode: using cache from {}", label));
        }
        CatalogOrigin::Downloaded { file, removed } => {
            console::success(format!("Received {} entries", loaded.releases.len()));
            console::info(format!("Cache saved: {}", file));
            for name in removed {
                tracing::info!("[INFO] Removed old cache: {}", name);
            }
        }
        CatalogOrigin::Stale { file, error } => {
            console::error(format!("Network error: {}", error));
            console::warn(format!("Using stale cache: {}", file));
        }
    }

    ctx.catalog = Some(loaded.releases);
    Ok(true)
}

pub(super) fn show_cache_info(ctx: &InstallerContext<'_>) -> Result<(), AppError> {
    let Some(info) = ctx.cache().info()? else {
        console::warn("Cache not found");
        return Ok(());
    };

    console::heading("📦", "Cache information");
    console::field("File", 16, style(&info.file_name).cyan());
    console::field("Size", 16, style(human_size(info.size)).yellow());
    console::field("Age", 16, style(format_age(info.age)).yellow());
    console::field("Entries", 16, style(info.entries).green());
    console::field("Available OSes", 16, style(info.oses.join(", ")).cyan());
    console::field("Stored caches", 16, style(info.stored).green());
    console::separator();
    Ok(())
}
