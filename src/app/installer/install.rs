use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ::console::style;

use super::select::Selection;
use super::{InstallerContext, shell};
use crate::app::console;
use crate::domain::AppError;
use crate::domain::catalog::{PackageKind, Release, install_dir_name};
use crate::domain::installer::shell_env::{JAVA_PATH_LINE, java_home_cmd, path_cmd, quick_activation_cmd};
use crate::domain::units::human_size;
use crate::ports::{CommandOutput, ask_yes_no};
use crate::services::downloader::DownloadOutcome;
use crate::services::folder_scan::count_files;
use crate::services::unpack::{
    LATEST_LINK, newest_recent_dir, replace_latest_link, tar_root_dir, unpack_tar_gz, unpack_zip,
    zip_root_dir,
};
use crate::services::{DownloadOptions, DownloadRequest, Downloader};

/// How long after unpacking a directory still counts as the one just created.
const FRESH_DIR_WINDOW: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArchiveFormat {
    TarGz,
    Zip,
}

/// Download the selected release and install it. Returns whether it succeeded.
pub(super) fn install_release(ctx: &mut InstallerContext<'_>, selection: &Selection) -> Result<bool, AppError> {
    let release = &selection.release;
    if release.download_url.is_empty() || release.filename.is_empty() {
        console::error(AppError::IncompleteRelease("missing download URL or file name".into()));
        return Ok(false);
    }

    let Some(package) = download(ctx, release)? else {
        return Ok(false);
    };

    println!();
    console::heading("🛠️", "Installing Java");
    match install_package(ctx, release, &package) {
        Ok(installed) => Ok(installed),
        Err(e) => {
            console::error(format!("Installation error: {}", e));
            Ok(false)
        }
    }
}

fn download(ctx: &InstallerContext<'_>, release: &Release) -> Result<Option<PathBuf>, AppError> {
    let options = DownloadOptions::from_settings(&ctx.settings);
    let downloader = Downloader::new(ctx.downloads_dir(), options)?;
    let target = downloader.target_path(&release.filename);

    console::download(format!("Downloading {}", release.filename));
    println!("{} {}", style("Source:").dim(), release.download_url);
    println!("{} {}", style("Saving to:").dim(), target.display());

    let request = DownloadRequest {
        url: &release.download_url,
        filename: &release.filename,
        expected_size: release.expected_size(),
        sha1: release.sha1(),
    };
    let downloaded = match downloader.download(&request) {
        Ok(downloaded) => downloaded,
        Err(e) => {
            console::error(format!("Download failed: {}", e));
            return Ok(None);
        }
    };

    match downloaded.outcome {
        DownloadOutcome::Reused { verified } => {
            console::success(format!("File already exists ({})", human_size(downloaded.size)));
            if verified {
                console::success("Checksum matches, download skipped");
            } else {
                console::info("Using existing file");
            }
        }
        DownloadOutcome::Transferred { elapsed, resumed_from } => {
            if resumed_from > 0 {
                console::info(format!("Resumed after {}", human_size(resumed_from)));
            }
            console::success(format!("Downloaded {}", human_size(downloaded.size)));
            console::info(format!("Download time: {:.1} s", elapsed.as_secs_f64()));
            if options.check_sha1 && request.sha1.is_some() {
                console::success("SHA1 checksum verified");
            }
        }
    }
    if let Some((expected, actual)) = downloaded.size_mismatch {
        console::warn(format!(
            "Size mismatch: expected {}, got {}",
            human_size(expected),
            human_size(actual)
        ));
    }
    Ok(Some(downloaded.path))
}

fn install_package(ctx: &mut InstallerContext<'_>, release: &Release, package: &Path) -> Result<bool, AppError> {
    let os = std::env::consts::OS;
    let path = package.to_string_lossy();

    match release.package_kind() {
        PackageKind::TarGz => install_archive(ctx, release, package, ArchiveFormat::TarGz),
        PackageKind::Zip => install_archive(ctx, release, package, ArchiveFormat::Zip),
        PackageKind::Deb if os == "linux" => {
            let output = run_tool(ctx, "sudo", &["dpkg", "-i", &path])?;
            if !output.success && output.stderr.contains("dependency") {
                console::info("Fix missing dependencies with: sudo apt --fix-broken install");
            }
            Ok(output.success)
        }
        PackageKind::Rpm if os == "linux" => {
            Ok(run_tool(ctx, "sudo", &["rpm", "-i", "--nodeps", &path])?.success)
        }
        PackageKind::Msi if os == "windows" => {
            Ok(run_tool(ctx, "msiexec", &["/i", &path, "/quiet"])?.success)
        }
        _ => {
            console::warn(format!(
                "Automatic installation of '{}' packages is not supported on {}",
                release.package_type, os
            ));
            console::info(format!("Package saved to: {}", package.display()));
            console::info("Install it manually with your system's package tools");
            Ok(true)
        }
    }
}

fn run_tool(ctx: &InstallerContext<'_>, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
    console::info(format!("Running: {} {}", program, args.join(" ")));
    let output = ctx.runner.run(program, args)?;
    if output.success {
        console::success("Package installed");
    } else {
        let details = output.stderr.trim();
        console::error(format!("{} failed: {}", program, details));
    }
    Ok(output)
}

fn install_archive(
    ctx: &mut InstallerContext<'_>,
    release: &Release,
    package: &Path,
    format: ArchiveFormat,
) -> Result<bool, AppError> {
    let install_dir = ctx.settings.install_path();
    fs::create_dir_all(&install_dir)?;

    let root = match format {
        ArchiveFormat::TarGz => tar_root_dir(package)?,
        ArchiveFormat::Zip => zip_root_dir(package)?,
    };
    let has_root = root.is_some();
    let dir_name = root.unwrap_or_else(|| install_dir_name(&release.filename).to_string());
    let mut target = install_dir.join(&dir_name);

    if target.exists() {
        console::warn(format!("Directory already exists: {}", target.display()));
        if let Err(e) = fs::remove_dir_all(&target) {
            console::error(format!("Cannot remove the existing directory: {}", e));
            console::info(format!("Remove it manually: rm -rf \"{}\"", target.display()));
            return Ok(false);
        }
        console::info("Previous installation removed");
    }

    // Archives without a top-level directory are unpacked into one named after the file.
    let dest = if has_root { install_dir.clone() } else { target.clone() };
    console::info(format!("Unpacking to {}...", dest.display()));
    match format {
        ArchiveFormat::TarGz => unpack_tar_gz(package, &dest)?,
        ArchiveFormat::Zip => unpack_zip(package, &dest)?,
    }

    if !target.is_dir()
        && format == ArchiveFormat::Zip
        && let Some(found) = newest_recent_dir(&install_dir, FRESH_DIR_WINDOW)
    {
        target = found;
    }
    if !target.is_dir() {
        console::error(format!("Unpacked directory not found: {}", target.display()));
        return Ok(false);
    }

    console::success(format!("Java unpacked to: {}", target.display()));
    console::info(format!("Installed files: {}", count_files(&target)));

    let latest = match replace_latest_link(&install_dir, &target) {
        Ok(link) => {
            let name = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            console::info(format!("Created link: {} → {}", LATEST_LINK, name));
            Some(link)
        }
        Err(e) => {
            console::warn(format!("Could not create the '{}' link: {}", LATEST_LINK, e));
            None
        }
    };

    print_env_instructions(&target, latest.as_deref());

    let question = "Add Java to shell configuration automatically?";
    if ask_yes_no(&mut *ctx.prompt, question, false)? == Some(true) {
        shell::configure_shell(ctx, &target, latest.as_deref())?;
    }
    Ok(true)
}

fn print_env_instructions(java_home: &Path, latest: Option<&Path>) {
    println!();
    console::heading("🔧", "Environment setup");

    for (shell, rc) in [("Bash", "~/.bashrc"), ("Zsh", "~/.zshrc")] {
        println!("{}", style(format!("{} ({}):", shell, rc)).bold());
        println!("  {}", style(java_home_cmd(java_home)).green());
        println!("  {}", style(JAVA_PATH_LINE).green());
        println!();
    }

    if let Some(link) = latest {
        println!("{}", style(format!("Using the '{}' link (recommended):", LATEST_LINK)).bold());
        println!("  {}", style(java_home_cmd(link)).green());
        println!("  {}", style(JAVA_PATH_LINE).green());
        println!();
    }

    println!("{}", style("Current session only:").bold());
    println!("  {}", style(java_home_cmd(java_home)).green());
    println!("  {}", style(path_cmd(Some(&java_home.join("bin")))).green());
    println!();

    println!("{}", style("Quick activation:").bold());
    println!("  {}", style(quick_activation_cmd(java_home)).green());
    println!();

    println!("{}", style("Verify the installation:").bold());
    for command in ["java -version", "javac -version", "echo $JAVA_HOME"] {
        println!("  {}", style(command).cyan());
    }
    console::separator();
}
