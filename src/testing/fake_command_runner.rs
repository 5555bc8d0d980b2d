use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Records invocations and answers with a fixed output.
pub struct FakeCommandRunner {
    output: CommandOutput,
    pub invocations: Mutex<Vec<String>>,
}

impl FakeCommandRunner {
    pub fn succeeding() -> Self {
        Self::with_output(CommandOutput { success: true, ..CommandOutput::default() })
    }

    pub fn failing(stderr: &str) -> Self {
        Self::with_output(CommandOutput {
            success: false,
            stderr: stderr.to_string(),
            ..CommandOutput::default()
        })
    }

    fn with_output(output: CommandOutput) -> Self {
        Self { output, invocations: Mutex::new(Vec::new()) }
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let mut line = vec![program];
        line.extend_from_slice(args);
        self.invocations.lock().unwrap().push(line.join(" "));
        Ok(self.output.clone())
    }
}
