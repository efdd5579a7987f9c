//! Application services (use cases).
//!
//! These services orchestrate domain logic and the prompt port to implement
//! the planner's use cases.

pub mod planner;
pub mod prompt;
