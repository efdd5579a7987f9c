//! Terminal prompter.
//!
//! Uses `dialoguer` when attached to a terminal. When stdin is piped, reads
//! plain lines instead so answers can be scripted (`printf '...' | frontier`).

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};
use crate::port::Prompter;

/// [`Prompter`] backed by the process's stdin and stderr.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a prompter, detecting whether stdin is a terminal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn read_piped(prompt: &str) -> Result<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt}: ")?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(stderr)?;
            return Err(Error::InputClosed {
                prompt: question(prompt).to_string(),
            });
        }
        writeln!(stderr)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// The last line of a prompt is the question; earlier lines are a menu.
fn question(prompt: &str) -> &str {
    prompt.lines().last().unwrap_or(prompt)
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return Self::read_piped(prompt);
        }

        let mut menu = prompt.lines().collect::<Vec<_>>();
        let question = menu.pop().unwrap_or(prompt);
        for line in menu {
            eprintln!("{line}");
        }

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn notify(&mut self, message: &str) {
        output::error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_last_prompt_line() {
        assert_eq!(question("Pick one:\n1. A\n2. B\nEnter 1 or 2"), "Enter 1 or 2");
        assert_eq!(question("Enter the currency"), "Enter the currency");
    }
}
