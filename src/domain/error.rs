use std::io;

use thiserror::Error;

/// Library-wide error type for fieldkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// User input did not pass validation.
    #[error("{0}")]
    Validation(String),

    /// Settings file exists but could not be decoded.
    #[error("Failed to read settings from {path}: {details}")]
    SettingsParse { path: String, details: String },

    /// HTTP request to the release catalog or a download URL failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Catalog payload is not the expected JSON array.
    #[error("Invalid catalog data: {0}")]
    CatalogFormat(String),

    /// Offline mode was requested but no cached catalog exists.
    #[error("Offline mode: no cached catalog data in {0}")]
    OfflineCacheMissing(String),

    /// Downloaded file does not match the published SHA1.
    #[error("Checksum mismatch for {file}: expected {expected}, got {actual}")]
    ChecksumMismatch { file: String, expected: String, actual: String },

    /// Zip or tar archive could not be written or read.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Archive entry would be written outside the destination directory.
    #[error("Refusing to unpack '{0}': path escapes the destination directory")]
    UnsafeArchivePath(String),

    /// Release descriptor misses the fields needed to download it.
    #[error("Release data is incomplete: {0}")]
    IncompleteRelease(String),

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => AppError::Io(io),
            other => AppError::Archive(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_display_transparently() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn checksum_mismatch_mentions_both_digests() {
        let err = AppError::ChecksumMismatch {
            file: "jdk.tar.gz".into(),
            expected: "aaa".into(),
            actual: "bbb".into(),
        };
        let message = err.to_string();
        assert!(message.contains("aaa"));
        assert!(message.contains("bbb"));
    }
}
