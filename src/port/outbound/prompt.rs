//! Prompt port for line-oriented user input.
//!
//! The planner asks for a handful of values (salary, currency, goal, risk).
//! Implementations read one raw line per call; validation and re-prompting
//! live in [`crate::application::prompt`].

use crate::error::Result;

/// Source of interactive answers.
pub trait Prompter {
    /// Show `prompt` and return the next raw line, without the line ending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`](crate::error::Error::InputClosed) when
    /// input ends, or an IO error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Tell the user their last answer was rejected.
    fn notify(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}
