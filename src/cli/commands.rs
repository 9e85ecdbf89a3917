//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mapforge CLI
#[derive(Parser, Debug)]
#[command(name = "mapforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an index mapping from sample data
    Mapping {
        /// Path to the file containing the data. Format: NDJSON
        file: PathBuf,

        /// Number of lines to consider for generating the mapping.
        /// Avoid going over 10.
        #[arg(long, default_value = "2")]
        nb_lines: usize,

        /// Override the mapping with the provided field/type.
        /// Example: fragment.location:geo_point
        #[arg(long = "field-mapping")]
        field_mapping: Vec<String>,

        /// YAML file of field/type overrides; inline --field-mapping
        /// flags win on conflict
        #[arg(long)]
        field_mapping_file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
