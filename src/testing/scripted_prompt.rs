use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompt;

/// Prompt answering from a fixed script; running out behaves like closed input.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), asked: Vec::new() }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
