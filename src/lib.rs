//! fieldkit: a prefixed-folder zip archiver with backup rotation, and an
//! interactive installer for BellSoft Liberica Java.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::AppError;
