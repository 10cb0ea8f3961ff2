//! Configuration module
//!
//! A CLI config file carries the boundary options under `[boundaries]` and
//! output defaults under `[output]`. `--set key=value` overrides are applied
//! on top of whatever the file says.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use subword_core::BoundaryOptions;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Boundary options for the navigator
    #[serde(default)]
    pub boundaries: BoundaryOptions,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a CLI config document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a CLI config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the config from `path` (or the defaults) and apply overrides
    pub fn load(path: Option<&Path>, overrides: &[String]) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        for assignment in overrides {
            config
                .boundaries
                .apply_override(assignment)
                .map_err(|e| CliError::ConfigError(e.to_string()))
                .with_context(|| format!("Invalid override: {assignment}"))?;
            log::debug!("Applied override {assignment}");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use subword_core::{SkipConnectedOperators, SkipConnectedWhitespace};
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[boundaries]
recognize_pascal = false
skip_connected_whitespace = "before_anything"

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        assert!(!config.boundaries.recognize_pascal);
        assert_eq!(
            config.boundaries.skip_connected_whitespace,
            SkipConnectedWhitespace::BeforeAnything
        );
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let error = CliConfig::from_toml_str("[colours]\nenabled = true\n").unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_load_applies_overrides_after_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("subword.toml");
        fs::write(
            &path,
            "[boundaries]\nskip_connected_operators = \"before_words\"\n",
        )
        .unwrap();

        let config = CliConfig::load(
            Some(&path),
            &["skip_connected_operators=after_words".to_string()],
        )
        .unwrap();
        assert_eq!(
            config.boundaries.skip_connected_operators,
            SkipConnectedOperators::AfterWords
        );
    }

    #[test]
    fn test_load_rejects_bad_override() {
        let error = CliConfig::load(None, &["recognize_pascal=maybe".to_string()]).unwrap_err();
        assert!(format!("{error:#}").contains("recognize_pascal=maybe"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/subword.toml");
        let error = CliConfig::load(Some(path), &[]).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }
}
