pub mod backup_store;
pub mod catalog_cache;
pub mod catalog_http;
pub mod downloader;
pub mod folder_scan;
pub mod log_file;
pub mod maintenance;
pub mod settings_store;
pub mod shell_rc;
pub mod system_command;
pub mod terminal_prompt;
pub mod unpack;
pub mod zip_archiver;

pub use catalog_cache::{CachePolicy, CatalogCache, CatalogOrigin, LoadedCatalog};
pub use catalog_http::HttpReleaseSource;
pub use downloader::{DownloadOptions, DownloadRequest, Downloader};
pub use system_command::SystemCommandRunner;
pub use terminal_prompt::TerminalPrompt;
