mod command_runner;
mod prompt;
mod release_source;

pub use command_runner::{CommandOutput, CommandRunner};
pub use prompt::{Prompt, ask_yes_no};
pub use release_source::ReleaseSource;
