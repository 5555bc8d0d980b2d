//! Zip creation and integrity checks for folder backups.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::AppError;

/// Zip `folder` into `destination`.
///
/// Entry names start with the folder's own name. Dot-entries are skipped
/// unless `include_hidden` is set. Returns the archive size in bytes.
pub fn create_archive(
    folder: &Path,
    destination: &Path,
    compression_level: u8,
    include_hidden: bool,
) -> Result<u64, AppError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    let base = folder.parent().unwrap_or(Path::new(""));

    // Deflate has no level 0; store the entries instead.
    let options = if compression_level == 0 {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(compression_level)))
    };

    let mut writer = ZipWriter::new(File::create(destination)?);
    for file in collect_files(folder, include_hidden)? {
        let name = entry_name(&file, base)?;
        tracing::debug!("adding {}", name);
        let mut source = File::open(&file)?;
        writer.start_file(name, entry_options(options, source.metadata()?.len()))?;
        io::copy(&mut source, &mut writer)?;
    }
    writer.finish()?;

    Ok(fs::metadata(destination)?.len())
}

/// Entries of 4 GiB and more need Zip64 headers.
fn entry_options(options: SimpleFileOptions, len: u64) -> SimpleFileOptions {
    options.large_file(len >= u64::from(u32::MAX))
}

/// Read every entry of the archive to the end so each CRC32 is checked.
pub fn verify_archive(path: &Path) -> Result<usize, AppError> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        io::copy(&mut entry, &mut io::sink())
            .map_err(|e| AppError::Archive(format!("{}: {}", entry.name(), e)))?;
    }
    Ok(archive.len())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn collect_files(root: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries: Vec<PathBuf> =
            fs::read_dir(&dir)?.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect();
        entries.sort();

        for path in entries {
            if !include_hidden && is_hidden(&path) {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

fn entry_name(file: &Path, base: &Path) -> Result<String, AppError> {
    let relative = file
        .strip_prefix(base)
        .map_err(|_| AppError::Archive(format!("{} is outside {}", file.display(), base.display())))?;
    let parts: Vec<String> =
        relative.components().map(|part| part.as_os_str().to_string_lossy().into_owned()).collect();
    Ok(parts.join("/"))
}
