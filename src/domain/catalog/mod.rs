//! Liberica release catalog model.

mod cache_name;
mod filter;
mod release;

pub use cache_name::{
    CACHE_FILE_PREFIX, cache_file_name, cache_label, is_cache_file, sort_cache_names,
};
pub use filter::{ReleaseField, ReleaseQuery, compare_versions, matching, unique_values};
pub use release::{PackageKind, Release, install_dir_name};
