//! CLI module graph.

pub mod catalog;
pub mod command;
pub mod output;
pub mod paths;
pub mod plan;
pub mod report;
pub mod tax;
