//! Resumable, checksum-verified package downloads.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{RANGE, USER_AGENT};
use sha1::{Digest, Sha1};

use super::catalog_http::CLIENT_USER_AGENT;
use crate::domain::AppError;
use crate::domain::installer::InstallerSettings;
use crate::domain::units::format_eta;

const PROGRESS_TEMPLATE: &str =
    "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec} ({eta_short})";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOptions {
    pub resume: bool,
    pub check_sha1: bool,
    pub show_progress: bool,
    pub timeout_secs: u64,
}

impl DownloadOptions {
    pub fn from_settings(settings: &InstallerSettings) -> Self {
        Self {
            resume: settings.download_resume,
            check_sha1: settings.check_sha1,
            show_progress: settings.show_progress,
            timeout_secs: settings.timeout,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DownloadRequest<'a> {
    pub url: &'a str,
    pub filename: &'a str,
    pub expected_size: Option<u64>,
    pub sha1: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A complete file was already present.
    Reused { verified: bool },
    Transferred { elapsed: Duration, resumed_from: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub size: u64,
    pub outcome: DownloadOutcome,
    /// Expected and actual size when they differ.
    pub size_mismatch: Option<(u64, u64)>,
}

pub struct Downloader {
    client: Client,
    downloads_dir: PathBuf,
    options: DownloadOptions,
}

impl Downloader {
    pub fn new(downloads_dir: impl Into<PathBuf>, options: DownloadOptions) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, downloads_dir: downloads_dir.into(), options })
    }

    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.downloads_dir.join(filename)
    }

    pub fn download(&self, request: &DownloadRequest<'_>) -> Result<Downloaded, AppError> {
        fs::create_dir_all(&self.downloads_dir)?;
        let path = self.target_path(request.filename);
        let sha1 = request.sha1.filter(|_| self.options.check_sha1);

        let mut offset = 0;
        if self.options.resume && path.is_file() {
            let existing = fs::metadata(&path)?.len();
            match request.expected_size {
                Some(expected) if existing == expected => match sha1 {
                    Some(expected_sha) => {
                        if sha1_file(&path)?.eq_ignore_ascii_case(expected_sha) {
                            return Ok(reused(path, existing, true));
                        }
                        tracing::warn!("[WARN] Checksum of {} differs, downloading again", request.filename);
                    }
                    None => return Ok(reused(path, existing, false)),
                },
                Some(expected) if existing > 0 && existing < expected => offset = existing,
                _ => {}
            }
        }

        let started = Instant::now();
        let resumed_from = match self.transfer(request, &path, offset) {
            Ok(resumed_from) => resumed_from,
            Err(e) => {
                let _ = fs::remove_file(&path);
                return Err(e);
            }
        };

        let size = fs::metadata(&path)?.len();
        let size_mismatch =
            request.expected_size.filter(|expected| *expected != size).map(|expected| (expected, size));

        if let Some(expected_sha) = sha1 {
            let actual = sha1_file(&path)?;
            if !actual.eq_ignore_ascii_case(expected_sha) {
                fs::remove_file(&path)?;
                return Err(AppError::ChecksumMismatch {
                    file: request.filename.to_string(),
                    expected: expected_sha.to_string(),
                    actual,
                });
            }
        }

        Ok(Downloaded {
            path,
            size,
            outcome: DownloadOutcome::Transferred { elapsed: started.elapsed(), resumed_from },
            size_mismatch,
        })
    }

    /// Stream the body into `path`; returns the offset the transfer resumed from.
    fn transfer(&self, request: &DownloadRequest<'_>, path: &Path, offset: u64) -> Result<u64, AppError> {
        let mut builder = self.client.get(request.url).header(USER_AGENT, CLIENT_USER_AGENT);
        if offset > 0 {
            builder = builder.header(RANGE, format!("bytes={}-", offset));
        }
        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("download returned {}", status)));
        }

        let (mut file, start) = if offset > 0 && status == StatusCode::PARTIAL_CONTENT {
            tracing::info!("[DL] Resuming {} from byte {}", request.filename, offset);
            (OpenOptions::new().append(true).open(path)?, offset)
        } else {
            (File::create(path)?, 0)
        };

        let total = response.content_length().map(|len| len + start).or(request.expected_size);
        let progress = self.progress_bar(total, request.filename);
        progress.set_position(start);

        let mut reader = progress.wrap_read(response);
        io::copy(&mut reader, &mut file)?;
        progress.finish_and_clear();
        Ok(start)
    }

    fn progress_bar(&self, total: Option<u64>, filename: &str) -> ProgressBar {
        let Some(total) = total.filter(|_| self.options.show_progress) else {
            return ProgressBar::hidden();
        };
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("eta_short", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{}", format_eta(state.eta().as_secs_f64()));
            })
            .progress_chars("=> ");
        let bar = ProgressBar::new(total);
        bar.set_style(style);
        bar.set_message(filename.to_string());
        bar
    }
}

fn reused(path: PathBuf, size: u64, verified: bool) -> Downloaded {
    Downloaded { path, size, outcome: DownloadOutcome::Reused { verified }, size_mismatch: None }
}

/// Lowercase hex SHA1 of a file.
pub fn sha1_file(path: &Path) -> Result<String, AppError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
