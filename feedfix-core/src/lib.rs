//! Embeddable core library for feedfix.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into a server process or other host.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`TableSource`](ports::TableSource) — load the input table
//! - [`TableSink`](ports::TableSink) — write a fixed table back out
//! - [`WritePort`](ports::WritePort) — write report artifacts
//!
//! The [`adapters`] module provides CSV/filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_check`](pipeline::run_check) — canonicalize, validate, score
//! - [`run_fix`](pipeline::run_fix) — the same, plus auto-fix and re-score

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the profile API so embedders don't need feedfix-profiles
// directly.
pub use feedfix_profiles::{ConfigError, FormatRuleSet, ruleset, rulesets};
