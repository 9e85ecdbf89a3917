//! CLI module
//!
//! Command-line interface for mapping generation.
//!
//! # Commands
//!
//! - `mapping` - Generate an index mapping from NDJSON sample data

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
