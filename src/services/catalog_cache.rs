//! Timestamped on-disk copies of the release catalog.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::Local;

use super::catalog_http::{decode_releases, parse_catalog};
use crate::domain::AppError;
use crate::domain::catalog::{
    Release, ReleaseField, cache_file_name, cache_label, is_cache_file, sort_cache_names,
    unique_values,
};
use crate::domain::installer::InstallerSettings;
use crate::ports::ReleaseSource;

/// How [`CatalogCache::fetch`] decides between cached and remote data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_age: Duration,
    /// When off, any cached copy is used regardless of age.
    pub auto_update: bool,
    pub offline: bool,
    /// Cache files kept after a download, the new one included.
    pub keep: usize,
}

impl CachePolicy {
    pub fn from_settings(settings: &InstallerSettings) -> Self {
        Self {
            max_age: Duration::from_secs(settings.cache_max_age_hours.saturating_mul(3600)),
            auto_update: settings.auto_update_cache,
            offline: settings.offline_mode,
            keep: settings.keep_old_cache.max(1) as usize,
        }
    }
}

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Cache younger than the maximum age.
    Cached { file: String, age: Duration },
    /// Offline mode; `label` is the cache timestamp.
    Offline { label: String },
    /// Freshly downloaded and stored as `file`.
    Downloaded { file: String, removed: Vec<String> },
    /// Download failed; fell back to the newest cache.
    Stale { file: String, error: String },
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub releases: Vec<Release>,
    pub path: PathBuf,
    pub origin: CatalogOrigin,
}

/// Summary of the newest cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInfo {
    pub file_name: String,
    pub size: u64,
    pub age: Duration,
    pub entries: usize,
    pub oses: Vec<String>,
    pub stored: usize,
}

#[derive(Debug, Clone)]
pub struct CatalogCache {
    dir: PathBuf,
}

impl CatalogCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file names, newest first.
    pub fn cache_files(&self) -> Result<Vec<String>, AppError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| is_cache_file(name))
            .collect();
        sort_cache_names(&mut names);
        Ok(names)
    }

    pub fn latest(&self) -> Result<Option<PathBuf>, AppError> {
        Ok(self.cache_files()?.into_iter().next().map(|name| self.dir.join(name)))
    }

    pub fn read(&self, path: &Path) -> Result<Vec<Release>, AppError> {
        let content = fs::read_to_string(path)?;
        parse_catalog(&content)
    }

    /// Store the raw catalog `payload` under a new timestamped name.
    pub fn save(&self, payload: &serde_json::Value) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(cache_file_name(&Local::now()));
        fs::write(&path, serde_json::to_string_pretty(payload)?)?;
        Ok(path)
    }

    /// Delete cache files beyond the `keep` newest.
    pub fn prune(&self, keep: usize) -> Result<Vec<String>, AppError> {
        let mut removed = Vec::new();
        for name in self.cache_files()?.into_iter().skip(keep) {
            match fs::remove_file(self.dir.join(&name)) {
                Ok(()) => removed.push(name),
                Err(e) => tracing::debug!("could not remove cache {}: {}", name, e),
            }
        }
        Ok(removed)
    }

    /// Load the catalog, downloading it when the cache is missing or stale.
    pub fn fetch(
        &self,
        source: &dyn ReleaseSource,
        policy: &CachePolicy,
        force: bool,
    ) -> Result<LoadedCatalog, AppError> {
        let latest = self.latest()?;

        if let Some(path) = &latest
            && !force
        {
            let age = file_age(path)?;
            if age < policy.max_age || !policy.auto_update {
                let releases = self.read(path)?;
                let file = file_name(path);
                return Ok(LoadedCatalog {
                    releases,
                    path: path.clone(),
                    origin: CatalogOrigin::Cached { file, age },
                });
            }
        }

        if policy.offline {
            let path = latest.ok_or_else(|| {
                AppError::OfflineCacheMissing(self.dir.display().to_string())
            })?;
            let label = cache_label(&file_name(&path)).to_string();
            let releases = self.read(&path)?;
            return Ok(LoadedCatalog { releases, path, origin: CatalogOrigin::Offline { label } });
        }

        tracing::debug!("requesting catalog from {}", source.describe());
        match source.fetch_catalog() {
            Ok(payload) => {
                let releases = decode_releases(&payload)?;
                let path = self.save(&payload)?;
                let removed = self.prune(policy.keep)?;
                let file = file_name(&path);
                Ok(LoadedCatalog { releases, path, origin: CatalogOrigin::Downloaded { file, removed } })
            }
            Err(AppError::Network(error)) => {
                let Some(path) = latest else {
                    return Err(AppError::Network(error));
                };
                let releases = self.read(&path)?;
                let file = file_name(&path);
                Ok(LoadedCatalog { releases, path, origin: CatalogOrigin::Stale { file, error } })
            }
            Err(e) => Err(e),
        }
    }

    pub fn info(&self) -> Result<Option<CacheInfo>, AppError> {
        let names = self.cache_files()?;
        let Some(newest) = names.first() else {
            return Ok(None);
        };
        let path = self.dir.join(newest);
        let releases = self.read(&path)?;
        Ok(Some(CacheInfo {
            file_name: newest.clone(),
            size: fs::metadata(&path)?.len(),
            age: file_age(&path)?,
            entries: releases.len(),
            oses: unique_values(&releases, ReleaseField::Os, &[]),
            stored: names.len(),
        }))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

fn file_age(path: &Path) -> Result<Duration, AppError> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(SystemTime::now().duration_since(modified).unwrap_or_default())
}
