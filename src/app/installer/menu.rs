use ::console::style;

use super::{InstallerContext, catalog, cleanup, install, log_menu, select, settings_menu};
use crate::app::console;
use crate::domain::AppError;
use crate::ports::ask_yes_no;

const TITLE: &str = "🚀 BellSoft Java Universal Installer";
pub(super) const CONTINUE: &str = "Press Enter to continue...";

fn print_menu(ctx: &InstallerContext<'_>) {
    console::clear_screen(ctx.prompt.is_interactive());
    console::separator();
    println!("{}", style(TITLE).cyan().bold());
    console::separator();
    if ctx.settings.offline_mode {
        println!("{}", style("Offline mode").yellow());
    }

    let items = [
        ("1", "☕ Install Java"),
        ("2", "🔄 Refresh release cache"),
        ("3", "📦 Cache information"),
        ("4", "🧹 Clean up old files"),
        ("5", "📜 View log"),
        ("6", "⚙️  Settings"),
        ("0", "🚪 Exit"),
    ];
    for (key, label) in items {
        println!("{} {}", style(format!("{}.", key)).bold(), label);
    }
    console::separator();
}

/// Main menu loop; returns when the user exits or input closes.
pub(super) fn main_loop(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    loop {
        print_menu(ctx);

        let Some(choice) = ctx.prompt.read_line("Select an action [0-6]")? else {
            println!();
            console::info("Input closed, exiting");
            return Ok(());
        };

        let result = match choice.trim() {
            "0" => {
                console::success("Done!");
                return Ok(());
            }
            "1" => install_flow(ctx),
            "2" => refresh_cache(ctx),
            "3" => catalog::show_cache_info(ctx),
            "4" => cleanup::run_cleanup(ctx),
            "5" => {
                log_menu::log_menu(ctx)?;
                continue;
            }
            "6" => {
                settings_menu::settings_menu(ctx)?;
                continue;
            }
            _ => {
                console::error("Invalid choice");
                Ok(())
            }
        };
        if let Err(e) = result {
            console::error(format!("Error: {}", e));
        }
        ctx.prompt.pause(CONTINUE)?;
    }
}

fn install_flow(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    if ctx.catalog.is_none() && !catalog::fetch_catalog(ctx, false)? {
        return Ok(());
    }

    let Some(selection) = select::interactive_setup(ctx)? else {
        return Ok(());
    };
    select::print_summary(&ctx.settings, &selection);

    if ask_yes_no(&mut *ctx.prompt, "Start installation?", false)? != Some(true) {
        console::warn("Installation cancelled");
        return Ok(());
    }

    if install::install_release(ctx, &selection)? {
        println!();
        console::success("Installation completed successfully!");
    } else {
        console::error("Installation failed");
    }
    Ok(())
}

fn refresh_cache(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    if catalog::fetch_catalog(ctx, true)? {
        console::success("Cache updated");
    } else {
        console::error("Failed to update cache");
    }
    Ok(())
}
