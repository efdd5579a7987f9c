//! Outbound adapters: implementations of outbound ports.

pub mod terminal;
