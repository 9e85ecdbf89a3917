//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::mapping::infer_mapping;
use crate::overrides::TypeOverrides;
use crate::sample;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Mapping {
                file,
                nb_lines,
                field_mapping,
                field_mapping_file,
                format,
            } => self.mapping(
                file,
                *nb_lines,
                field_mapping,
                field_mapping_file.as_deref(),
                *format,
            ),
        }
    }

    fn mapping(
        &self,
        file: &Path,
        nb_lines: usize,
        field_mapping: &[String],
        overrides_file: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        if !file.exists() {
            return Err(Error::file_not_found(file.display().to_string()));
        }

        let mut overrides = match overrides_file {
            Some(path) => TypeOverrides::from_yaml_file(path)?,
            None => TypeOverrides::new(),
        };
        overrides.extend(TypeOverrides::from_specs(field_mapping)?);

        let documents = sample::read_samples(file, nb_lines)?;
        info!(
            documents = documents.len(),
            overrides = overrides.len(),
            "generating mapping"
        );

        let mapping = infer_mapping(&documents, &overrides)?;
        match format {
            OutputFormat::Pretty => println!("{}", mapping.to_json_pretty()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&mapping)?),
        }
        Ok(())
    }
}
