pub mod archiver;
pub mod console;
pub mod installer;
