use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "liberica-install")]
#[command(version)]
#[command(about = "BellSoft Java Universal Installer", long_about = None)]
pub struct Cli {
    /// Working directory for cache, downloads, log and settings
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,
    /// Directory Java is installed into
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,
    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Use only the cached catalog
    #[arg(long)]
    pub offline: bool,
    /// Delete old downloads and caches, then exit
    #[arg(long)]
    pub cleanup: bool,
    /// Print the whole log file, then exit
    #[arg(long)]
    pub show_log: bool,
    /// Print information about the cached catalog, then exit
    #[arg(long)]
    pub cache_info: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
