//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`prompt`] - [`ScriptedPrompter`](prompt::ScriptedPrompter), a
//!   [`Prompter`](crate::port::Prompter) that replays canned answers.

pub mod prompt;
