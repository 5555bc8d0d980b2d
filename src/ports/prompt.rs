use crate::domain::AppError;

/// Line-oriented user input.
pub trait Prompt {
    /// Read one answer for `prompt`, without the trailing newline.
    ///
    /// Returns `None` when input is closed or the user interrupts.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Block until the user presses Enter.
    fn pause(&mut self, message: &str) -> Result<(), AppError> {
        self.read_line(message).map(|_| ())
    }

    /// Whether the screen may be cleared between menus.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Ask a yes/no question; an empty answer takes `default`.
///
/// Returns `None` when input is closed.
pub fn ask_yes_no(
    prompt: &mut dyn Prompt,
    question: &str,
    default: bool,
) -> Result<Option<bool>, AppError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let Some(answer) = prompt.read_line(&format!("{} [{}]", question, hint))? else {
        return Ok(None);
    };
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(Some(default));
    }
    Ok(Some(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
}
