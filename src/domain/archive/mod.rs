//! Folder archiver domain: settings and archive naming rules.

mod naming;
mod settings;

pub use naming::{
    BackupEntry, archive_file_name, is_archive_of, select_for_pruning, sort_newest_first,
};
pub use settings::{
    ARCHIVER_SETTINGS_FILE, ArchiverSettings, DEFAULT_BACKUP_COUNT, DEFAULT_COMPRESSION_LEVEL,
    DEFAULT_PREFIX, MAX_COMPRESSION_LEVEL,
};
