use ::console::style;

use super::InstallerContext;
use crate::app::console;
use crate::domain::AppError;
use crate::domain::catalog::{
    Release, ReleaseField, ReleaseQuery, install_dir_name, matching, unique_values,
};
use crate::domain::installer::InstallerSettings;
use crate::domain::render::{
    Choice, MenuStyle, choice_prompt, invalid_choice_message, menu_lines, parse_choice,
    release_lines, version_columns, version_items,
};
use crate::domain::units::human_size;
use crate::ports::Prompt;

/// Label offered when the catalog has no bundle types for a combination.
const STANDARD_BUNDLE: &str = "standard";
const FIELD_WIDTH: usize = 16;

/// The release picked by the interactive walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub query: ReleaseQuery,
    pub bundle_label: String,
    pub release: Release,
}

/// Show a numbered menu and read until a valid choice, back, or closed input.
pub(super) fn select_item(
    prompt: &mut dyn Prompt,
    title: &str,
    items: &[String],
    menu: MenuStyle,
) -> Result<Option<usize>, AppError> {
    if items.is_empty() {
        console::error("No options available");
        return Ok(None);
    }

    println!("\n{}", style(title).cyan().bold());
    console::thin_separator();
    for line in menu_lines(items, menu) {
        println!("{}", line);
    }
    console::thin_separator();

    loop {
        let Some(answer) = prompt.read_line(&choice_prompt(items.len(), menu.allow_back))? else {
            return Ok(None);
        };
        match parse_choice(&answer, items.len(), menu.allow_back) {
            Choice::Back => return Ok(None),
            Choice::Item(index) => return Ok(Some(index)),
            Choice::Invalid => console::error(invalid_choice_message(items.len(), menu.allow_back)),
        }
    }
}

/// Walk OS, architecture, package type, version, bundle and release menus.
///
/// Returns `None` when the user backs out or nothing matches.
pub(super) fn interactive_setup(ctx: &mut InstallerContext<'_>) -> Result<Option<Selection>, AppError> {
    let Some(releases) = ctx.catalog.as_deref() else {
        console::error("No catalog data loaded");
        return Ok(None);
    };
    let prompt = &mut *ctx.prompt;
    let limit = (ctx.settings.max_releases_display as usize).max(1);

    let Some(os) = pick(prompt, "🖥️  Select operating system:", unique_values(releases, ReleaseField::Os, &[]))?
    else {
        return cancelled();
    };

    let architectures = unique_values(releases, ReleaseField::Architecture, &[(ReleaseField::Os, &os)]);
    let Some(architecture) = pick(prompt, &format!("⚙️  Select architecture for {}:", os), architectures)? else {
        return cancelled();
    };

    let packages = unique_values(
        releases,
        ReleaseField::PackageType,
        &[(ReleaseField::Os, &os), (ReleaseField::Architecture, &architecture)],
    );
    let Some(package_type) = pick(prompt, "📦 Select package type:", packages)? else {
        return cancelled();
    };

    let versions = unique_values(
        releases,
        ReleaseField::FeatureVersion,
        &[
            (ReleaseField::Os, &os),
            (ReleaseField::Architecture, &architecture),
            (ReleaseField::PackageType, &package_type),
        ],
    );
    let menu = MenuStyle { columns: version_columns(versions.len()), ..MenuStyle::default() };
    let Some(index) = select_item(prompt, "☕ Select Java version:", &version_items(&versions), menu)? else {
        return cancelled();
    };
    let feature = &versions[index];
    let feature_version = feature
        .parse::<u32>()
        .map_err(|_| AppError::validation(format!("Invalid Java version '{}'", feature)))?;

    let bundles = unique_values(
        releases,
        ReleaseField::BundleType,
        &[
            (ReleaseField::Os, &os),
            (ReleaseField::Architecture, &architecture),
            (ReleaseField::PackageType, &package_type),
            (ReleaseField::FeatureVersion, feature),
        ],
    );
    let standard_only = bundles.is_empty();
    let bundles = if standard_only { vec![STANDARD_BUNDLE.to_string()] } else { bundles };
    let Some(bundle_label) = pick(prompt, "🎁 Select bundle type:", bundles)? else {
        return cancelled();
    };

    let query = ReleaseQuery {
        os,
        architecture,
        package_type,
        feature_version,
        bundle_type: (!standard_only).then(|| bundle_label.clone()),
    };
    let found = matching(releases, &query);
    if found.is_empty() {
        console::error("No releases found for the selected parameters");
        return Ok(None);
    }
    if found.len() > limit {
        console::info(format!("Showing the newest {} of {} releases", limit, found.len()));
    }

    let menu = MenuStyle { trim_long_lines: false, ..MenuStyle::default() };
    let lines = release_lines(&found, limit);
    let Some(index) = select_item(prompt, "🏷️  Select release:", &lines, menu)? else {
        return cancelled();
    };

    let release = found[index].clone();
    Ok(Some(Selection { query, bundle_label, release }))
}

fn pick(prompt: &mut dyn Prompt, title: &str, items: Vec<String>) -> Result<Option<String>, AppError> {
    let index = select_item(prompt, title, &items, MenuStyle::default())?;
    Ok(index.map(|index| items[index].clone()))
}

fn cancelled() -> Result<Option<Selection>, AppError> {
    console::warn("Installation cancelled");
    Ok(None)
}

fn yes_no(value: bool) -> &'static str {
    if value { "✅ Yes" } else { "❌ No" }
}

pub(super) fn print_summary(settings: &InstallerSettings, selection: &Selection) {
    let query = &selection.query;
    let release = &selection.release;
    let target = settings.install_path().join(install_dir_name(&release.filename));

    println!();
    console::heading("📋", "Selected release");
    console::field("OS", FIELD_WIDTH, style(&query.os).cyan());
    console::field("Architecture", FIELD_WIDTH, style(&query.architecture).cyan());
    console::field("Package type", FIELD_WIDTH, style(&query.package_type).cyan());
    console::field("Java version", FIELD_WIDTH, style(query.feature_version).green().bold());
    console::field("Bundle", FIELD_WIDTH, style(&selection.bundle_label).cyan());
    console::field("Release", FIELD_WIDTH, style(&release.version).green());
    console::field("File", FIELD_WIDTH, style(&release.filename).dim());
    console::field("Size", FIELD_WIDTH, style(human_size(release.size)).yellow());
    console::field("LTS", FIELD_WIDTH, style(yes_no(release.lts)));
    console::field("GA", FIELD_WIDTH, style(yes_no(release.ga)));
    console::field("SHA1", FIELD_WIDTH, style(release.sha1().unwrap_or("not specified")).dim());
    console::field("Install to", FIELD_WIDTH, style(target.display()).cyan());
    console::separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCommandRunner, FakeReleaseSource, ScriptedPrompt, release, sample_releases};

    fn run_setup(answers: &[&str], catalog: Vec<Release>) -> (Option<Selection>, ScriptedPrompt) {
        let mut prompt = ScriptedPrompt::new(answers);
        let source = FakeReleaseSource::failing();
        let runner = FakeCommandRunner::succeeding();
        let selection = {
            let mut ctx = InstallerContext::new(
                InstallerSettings::default(),
                "settings.json".into(),
                &mut prompt,
                &source,
                &runner,
                None,
            );
            ctx.catalog = Some(catalog);
            interactive_setup(&mut ctx).unwrap()
        };
        (selection, prompt)
    }

    #[test]
    fn walks_hierarchy_to_newest_release() {
        // linux, x86, tar.gz, Java 21, jdk, first release
        let (selection, _) = run_setup(&["1", "2", "2", "3", "1", "1"], sample_releases());
        let selection = selection.unwrap();

        assert_eq!(selection.query.feature_version, 21);
        assert_eq!(selection.query.bundle_type.as_deref(), Some("jdk"));
        assert_eq!(selection.release.version, "21.0.10+7");
        assert_eq!(selection.release.package_type, "tar.gz");
    }

    #[test]
    fn back_at_first_menu_cancels() {
        let (selection, prompt) = run_setup(&["0"], sample_releases());
        assert!(selection.is_none());
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let (selection, prompt) =
            run_setup(&["x", "9", "3", "1", "1", "1", "1", "1"], sample_releases());
        let selection = selection.unwrap();
        assert_eq!(selection.query.os, "windows");
        assert_eq!(selection.release.package_type, "msi");
        assert_eq!(prompt.asked[0], prompt.asked[2]);
    }

    #[test]
    fn missing_bundle_types_offer_standard() {
        let mut bare = release("linux", "x86", "zip", 17, "", "17.0.13+12");
        bare.bundle_type.clear();
        let (selection, _) = run_setup(&["1", "1", "1", "1", "1", "1"], vec![bare]);
        let selection = selection.unwrap();

        assert_eq!(selection.bundle_label, "standard");
        assert_eq!(selection.query.bundle_type, None);
        assert_eq!(selection.release.version, "17.0.13+12");
    }

    #[test]
    fn closed_input_cancels() {
        let (selection, _) = run_setup(&["1", "2"], sample_releases());
        assert!(selection.is_none());
    }

    #[test]
    fn no_catalog_means_nothing_to_select() {
        let mut prompt = ScriptedPrompt::new(&["1"]);
        let source = FakeReleaseSource::failing();
        let runner = FakeCommandRunner::succeeding();
        let mut ctx = InstallerContext::new(
            InstallerSettings::default(),
            "settings.json".into(),
            &mut prompt,
            &source,
            &runner,
            None,
        );
        assert!(interactive_setup(&mut ctx).unwrap().is_none());
        drop(ctx);
        assert!(prompt.asked.is_empty());
    }
}
