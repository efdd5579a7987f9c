//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                ┌─────────────────────────┐
//!   CLI ────────▶│  Application + Domain   │────────▶ Prompter
//!                └─────────────────────────┘         (terminal, scripted)
//! ```

pub mod outbound;

pub use outbound::prompt::Prompter;
