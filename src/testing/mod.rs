mod catalog;
mod fake_command_runner;
mod fake_release_source;
mod scripted_prompt;

#[allow(unused_imports)]
pub use catalog::{release, sample_releases};
#[allow(unused_imports)]
pub use fake_command_runner::FakeCommandRunner;
#[allow(unused_imports)]
pub use fake_release_source::FakeReleaseSource;
#[allow(unused_imports)]
pub use scripted_prompt::ScriptedPrompt;
