pub mod archive;
pub mod catalog;
pub mod error;
pub mod installer;
pub mod render;
pub mod units;

pub use error::AppError;
