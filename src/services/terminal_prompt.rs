use std::io::{self, BufRead, ErrorKind, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompt;

/// Prompt backed by the terminal, or by plain stdin when input is piped.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    attended: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { attended: console::user_attended() }
    }

    fn read_stdin(&self, prompt: &str) -> Result<Option<String>, AppError> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if !self.attended {
            return self.read_stdin(prompt);
        }
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Validation(format!("Failed to read input: {}", err))),
        }
    }

    fn is_interactive(&self) -> bool {
        self.attended
    }
}
