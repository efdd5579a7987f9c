//! Scripted prompter that replays canned answers.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::port::Prompter;

/// A [`Prompter`] fed from a fixed list of lines.
///
/// Records every prompt shown and every corrective notice so tests can
/// assert on the conversation. Running out of lines behaves like closed
/// input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, one per line read.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Corrective notices shown so far.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| Error::InputClosed {
            prompt: prompt.to_string(),
        })
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
