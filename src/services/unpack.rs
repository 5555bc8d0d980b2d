//! Unpacking of downloaded JDK archives into the install directory.

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime};

use flate2::read::GzDecoder;
use zip::ZipArchive;

use crate::domain::AppError;

pub const LATEST_LINK: &str = "latest";

/// Top-level directory of a tar.gz: first component of the first directory entry.
pub fn tar_root_dir(archive: &Path) -> Result<Option<String>, AppError> {
    let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive)?));
    for entry in tar.entries()? {
        let entry = entry?;
        if entry.header().entry_type().is_dir() {
            return Ok(first_component(&entry.path()?));
        }
    }
    Ok(None)
}

/// Top-level directory of a zip: first component of the first entry, if it has one.
pub fn zip_root_dir(archive: &Path) -> Result<Option<String>, AppError> {
    let zip = ZipArchive::new(File::open(archive)?)?;
    Ok(zip
        .file_names()
        .next()
        .filter(|name| name.contains('/'))
        .and_then(|name| first_component(Path::new(name))))
}

fn first_component(path: &Path) -> Option<String> {
    path.components().find_map(|part| match part {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    })
}

fn is_safe_relative(path: &Path) -> bool {
    path.components().all(|part| matches!(part, Component::Normal(_) | Component::CurDir))
}

/// Unpack a tar.gz into `dest`, refusing entries that escape it.
pub fn unpack_tar_gz(archive: &Path, dest: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dest)?;
    let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive)?));
    tar.set_preserve_permissions(true);
    for entry in tar.entries()? {
        let mut entry = entry?;
        let path = entry.path()?.into_owned();
        if !is_safe_relative(&path) {
            return Err(AppError::UnsafeArchivePath(path.display().to_string()));
        }
        entry.unpack_in(dest)?;
    }
    Ok(())
}

/// Unpack a zip into `dest`, refusing entries that escape it.
pub fn unpack_zip(archive: &Path, dest: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dest)?;
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    for index in 0..zip.len() {
        let entry = zip.by_index(index)?;
        if entry.enclosed_name().is_none() {
            return Err(AppError::UnsafeArchivePath(entry.name().to_string()));
        }
    }
    zip.extract(dest)?;
    Ok(())
}

/// Point `<install_dir>/latest` at `target` with a relative symlink, replacing any old entry.
pub fn replace_latest_link(install_dir: &Path, target: &Path) -> Result<PathBuf, AppError> {
    let link = install_dir.join(LATEST_LINK);
    if let Ok(meta) = fs::symlink_metadata(&link) {
        if meta.is_dir() {
            fs::remove_dir_all(&link)?;
        } else {
            fs::remove_file(&link)?;
        }
    }

    let relative = target
        .strip_prefix(install_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| target.to_path_buf());
    create_symlink(&relative, &link)?;
    Ok(link)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    std::os::unix::fs::symlink(target, link)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> Result<(), AppError> {
    Err(AppError::Configuration("symbolic links are not supported on this platform".into()))
}

/// Newest subdirectory of `dir` modified within `window`.
pub fn newest_recent_dir(dir: &Path, window: Duration) -> Option<PathBuf> {
    let now = SystemTime::now();
    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name() != LATEST_LINK)
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            let modified = meta.modified().ok()?;
            let recent = now.duration_since(modified).map(|age| age < window).unwrap_or(true);
            (meta.is_dir() && recent).then(|| (modified, entry.path()))
        })
        .max_by_key(|(modified, _)| *modified)
        .map(|(_, path)| path)
}
