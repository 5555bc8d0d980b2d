//! The installer's plain-text activity log.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::domain::AppError;

pub const LOG_FILE_NAME: &str = "installer.log";
/// Lines shown by the log viewer.
pub const TAIL_LINES: usize = 30;
/// Lines kept when the log is trimmed.
pub const KEEP_LINES: usize = 1000;
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Reopens the log in append mode for every event.
struct LogFile {
    path: PathBuf,
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = Box<dyn Write>;

    fn make_writer(&'a self) -> Self::Writer {
        match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::sink()),
        }
    }
}

/// Route `tracing` events to `path` as `[YYYY-MM-DD HH:MM:SS] message` lines.
///
/// The file is created by the first event. `RUST_LOG` overrides the default
/// `info` filter. A subscriber installed earlier in the process wins.
pub fn init_file_logging(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(LogFile { path: path.to_path_buf() })
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_timer(ChronoLocal::new("[%Y-%m-%d %H:%M:%S]".to_string()))
        .try_init();
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTail {
    pub lines: Vec<String>,
    pub total: usize,
}

/// Last `count` lines of the log; `None` when the file does not exist.
pub fn read_tail(path: &Path, count: usize) -> Result<Option<LogTail>, AppError> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();
    let lines = lines[total.saturating_sub(count)..].iter().map(|line| line.to_string()).collect();
    Ok(Some(LogTail { lines, total }))
}

pub fn clear_log(path: &Path) -> Result<(), AppError> {
    fs::write(path, "")?;
    Ok(())
}

/// Keep only the last `keep` lines. Returns the previous line count when trimmed.
pub fn trim_log(path: &Path, keep: usize) -> Result<Option<usize>, AppError> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= keep {
        return Ok(None);
    }

    let mut kept = lines[lines.len() - keep..].join("\n");
    kept.push('\n');
    fs::write(path, kept)?;
    Ok(Some(lines.len()))
}
