//! Frontier - salary to investment planner.
//!
//! Converts a monthly salary into INR, applies a progressive income-tax
//! schedule, derives a savings figure and recommends investment categories
//! for a chosen time horizon and risk appetite.
//!
//! # Pipeline
//!
//! ```text
//! convert → annualize → tax → allocate → recommend
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Currency conversion, tax schedule, savings cascade, option catalog
//! - [`application`] - The planner pipeline and retry-until-valid prompting
//! - [`port`] - The [`Prompter`](port::Prompter) trait
//! - [`adapter`] - CLI handlers, output formatting, terminal prompter
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use frontier::application::planner;
//! use frontier::domain::Currency;
//! use rust_decimal_macros::dec;
//!
//! let breakdown = planner::breakdown(dec!(50000), Currency::Usd);
//! assert_eq!(breakdown.annual_inr, dec!(49500000));
//! assert_eq!(breakdown.tax, dec!(14520000));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
