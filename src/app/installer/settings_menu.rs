use chrono::Local;
use ::console::style;

use super::InstallerContext;
use super::menu::CONTINUE;
use crate::app::console;
use crate::domain::AppError;
use crate::domain::installer::{InstallerSettings, SettingKey, SettingKind, SettingValue};
use crate::ports::{Prompt, ask_yes_no};
use crate::services::maintenance::SETTINGS_BACKUP_PREFIX;
use crate::services::settings_store::save_settings;

fn print_settings(settings: &InstallerSettings) {
    console::heading("⚙️", "Settings");
    let width = SettingKey::ALL.len().to_string().len();
    for (index, key) in SettingKey::ALL.iter().enumerate() {
        println!(
            "{} {} {}",
            style(format!("{:>width$}.", index + 1, width = width)).bold(),
            style(format!("{}:", key.display_name())).cyan(),
            settings.format_value(*key)
        );
    }
    console::thin_separator();
    println!("{} Reset to defaults", style("R.").bold());
    println!("{} Save and return", style("S.").bold());
    println!("{} Back", style("0.").bold());
}

pub(super) fn settings_menu(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    let count = SettingKey::ALL.len();
    loop {
        console::clear_screen(ctx.prompt.is_interactive());
        print_settings(&ctx.settings);

        let question = format!("Select an action [1-{}, R, S, 0]", count);
        let Some(choice) = ctx.prompt.read_line(&question)? else {
            return Ok(());
        };
        let choice = choice.trim().to_uppercase();

        match choice.as_str() {
            "0" => return Ok(()),
            "S" => {
                if ctx.save_settings() {
                    console::success("Settings saved");
                }
                return Ok(());
            }
            "R" => reset(ctx)?,
            _ => match choice.parse::<usize>() {
                Ok(number) if (1..=count).contains(&number) => {
                    edit(ctx, SettingKey::ALL[number - 1])?;
                }
                _ => console::error("Invalid choice"),
            },
        }
        ctx.prompt.pause(CONTINUE)?;
    }
}

fn edit(ctx: &mut InstallerContext<'_>, key: SettingKey) -> Result<(), AppError> {
    println!(
        "\n{} {}",
        style(format!("{}:", key.display_name())).bold(),
        ctx.settings.format_value(key)
    );

    let Some(value) = ask_value(&mut *ctx.prompt, &ctx.settings, key)? else {
        return Ok(());
    };
    if let Err(e) = ctx.settings.set(key, value) {
        console::error(e);
        return Ok(());
    }

    console::success(format!(
        "Setting changed: {} = {}",
        key.display_name(),
        ctx.settings.format_value(key)
    ));
    ctx.save_settings();
    if key == SettingKey::ShowColors {
        ctx.apply_colors();
    }
    Ok(())
}

/// Read a new value of the key's kind; empty input keeps the current one.
fn ask_value(
    prompt: &mut dyn Prompt,
    settings: &InstallerSettings,
    key: SettingKey,
) -> Result<Option<SettingValue>, AppError> {
    let current = match settings.value(key) {
        SettingValue::Text(text) => text,
        SettingValue::Integer(n) => n.to_string(),
        SettingValue::Flag(b) => (if b { "y" } else { "n" }).to_string(),
    };
    let question = match key.kind() {
        SettingKind::Flag => format!("Enable? (y/n) [{}]", current),
        _ => format!("New value [{}]", current),
    };
    let Some(answer) = prompt.read_line(&question)? else {
        return Ok(None);
    };
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    match key.kind() {
        SettingKind::Text => Ok(Some(SettingValue::Text(answer.to_string()))),
        SettingKind::Integer => match answer.parse::<i64>() {
            Ok(n) => Ok(Some(SettingValue::Integer(n))),
            Err(_) => {
                console::error("Invalid number");
                Ok(None)
            }
        },
        SettingKind::Flag => match answer.to_lowercase().as_str() {
            "y" | "yes" => Ok(Some(SettingValue::Flag(true))),
            "n" | "no" => Ok(Some(SettingValue::Flag(false))),
            _ => {
                console::error("Invalid value, answer y or n");
                Ok(None)
            }
        },
    }
}

/// Back up the current settings, then restore defaults. The cache directory is kept.
fn reset(ctx: &mut InstallerContext<'_>) -> Result<(), AppError> {
    if ask_yes_no(&mut *ctx.prompt, "Reset all settings to defaults?", false)? != Some(true) {
        return Ok(());
    }

    let backup = ctx.settings.cache_path().join(format!(
        "{}{}.json",
        SETTINGS_BACKUP_PREFIX,
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    match save_settings(&backup, &ctx.settings) {
        Ok(()) => console::info(format!("Previous settings saved to {}", backup.display())),
        Err(e) => console::warn(format!("Could not back up settings: {}", e)),
    }

    let cache_dir = std::mem::take(&mut ctx.settings.cache_dir);
    ctx.settings = InstallerSettings { cache_dir, ..InstallerSettings::default() };
    if ctx.save_settings() {
        console::success("Settings reset to defaults");
    }
    ctx.apply_colors();
    Ok(())
}
