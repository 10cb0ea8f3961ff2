//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use subword_core::BoundaryOptions;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a CLI config file or a bare boundary options file
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config_file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config_file.display());

        match load_any(&self.config_file) {
            Ok(options) => {
                println!("✓ Configuration is valid!");
                for name in BoundaryOptions::NAMES {
                    if let Some(value) = options.get(name) {
                        println!("  {name} = {value}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(CliError::ConfigError(format!("{e:#}")).into())
            }
        }
    }
}

/// Read boundary options from either file layout
///
/// A document with a `[boundaries]` or `[output]` table is a CLI config;
/// anything else is read as bare options.
pub fn load_any(path: &Path) -> CliResult<BoundaryOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: toml::Table = toml::from_str(&content)?;

    if document.contains_key("boundaries") || document.contains_key("output") {
        Ok(CliConfig::from_toml_str(&content)?.boundaries)
    } else {
        Ok(BoundaryOptions::from_toml_str(&content)?)
    }
}
