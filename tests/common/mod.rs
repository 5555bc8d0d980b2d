//! Shared testing utilities for the fieldkit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated `$HOME`, working directory and installer work directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    installer_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let installer_dir = root.path().join("installer");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, installer_dir }
    }

    /// Emulated `$HOME`.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the archiver scans.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory passed to the installer as `--work-dir`.
    pub fn installer_dir(&self) -> &Path {
        &self.installer_dir
    }

    pub fn install_dir(&self) -> PathBuf {
        self.root.path().join("Java")
    }

    /// `modpack-archiver` running in the work directory.
    pub fn archiver(&self) -> Command {
        let mut cmd = Command::cargo_bin("modpack-archiver").expect("Failed to locate archiver binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home());
        cmd
    }

    /// `liberica-install` with isolated work and install directories.
    pub fn installer(&self) -> Command {
        let mut cmd = Command::cargo_bin("liberica-install").expect("Failed to locate installer binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .arg("--work-dir")
            .arg(&self.installer_dir)
            .arg("--install-dir")
            .arg(self.install_dir())
            .arg("--no-color");
        cmd
    }

    /// Create a folder with one file in the archiver's work directory.
    pub fn make_folder(&self, name: &str) -> PathBuf {
        let folder = self.work_dir.join(name);
        fs::create_dir_all(folder.join("config")).expect("Failed to create folder");
        fs::write(folder.join("config/options.txt"), "fov:70\n").expect("Failed to write file");
        folder
    }

    /// Archives written under the default `$HOME/archives`.
    pub fn archives(&self) -> Vec<String> {
        let dir = self.home().join("archives");
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> =
            entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
        names.sort();
        names
    }

    /// Write a catalog cache file into the installer work directory.
    pub fn seed_catalog_cache(&self) {
        fs::create_dir_all(&self.installer_dir).expect("Failed to create installer directory");
        let catalog = r#"[
  {"os": "linux", "architecture": "x86", "packageType": "tar.gz", "featureVersion": 21,
   "bundleType": "jdk", "version": "21.0.5+11", "filename": "bellsoft-jdk21.0.5+11-linux-amd64.tar.gz",
   "downloadUrl": "https://download.bell-sw.com/java/21.0.5+11/bellsoft-jdk21.0.5+11-linux-amd64.tar.gz",
   "size": 203045102, "sha1": "abc", "LTS": true, "GA": true},
  {"os": "macos", "architecture": "arm", "packageType": "zip", "featureVersion": 17,
   "bundleType": "jre", "version": "17.0.13+12", "filename": "bellsoft-jre17.0.13+12-macos-aarch64.zip",
   "downloadUrl": "https://download.bell-sw.com/java/17.0.13+12/bellsoft-jre17.0.13+12-macos-aarch64.zip",
   "size": 45000000, "sha1": null, "LTS": true, "GA": true}
]"#;
        fs::write(self.installer_dir.join("api-cache-20250101_120000.json"), catalog)
            .expect("Failed to write catalog cache");
    }

    pub fn read_installer_file(&self, name: &str) -> String {
        fs::read_to_string(self.installer_dir.join(name)).expect("Failed to read installer file")
    }
}
