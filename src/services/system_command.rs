use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Runs programs with `std::process::Command`, capturing their output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::ExternalToolError {
                tool: format!("{} {}", program, args.join(" ")),
                error: e.to_string(),
            }
        })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
