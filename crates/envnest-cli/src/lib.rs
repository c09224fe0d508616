//! # envnest-cli
//!
//! Command-line interface for envnest.
//!
//! ```text
//! envnest '{"APP_DB__PORT": "5432", "APP_DEBUG": "true"}'
//! ```
//!
//! The single argument is a JSON object of string values. The nested, typed
//! result is printed to stdout as indented JSON (or TOML with `--format toml`).

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{Cli, USAGE, report};
pub use output::OutputFormat;
