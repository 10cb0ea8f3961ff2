//! Generate config command implementation

use crate::CliResult;
use anyhow::Context;
use clap::Args;
use std::fmt::Display;
use std::path::PathBuf;
use subword_core::{
    BoundaryOptions, SkipConnectedBrackets, SkipConnectedOperators, SkipConnectedUnderscores,
    SkipConnectedWhitespace,
};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to customize where sub-words stop");
        println!("2. Validate your configuration:");
        println!("   subword validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   subword --config {} split -i 'src/**/*.rs'",
            self.output.display()
        );

        Ok(())
    }
}

fn choices<T: Display>(variants: &[T]) -> String {
    variants
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Commented configuration file holding the default options
pub fn generate_template() -> String {
    let d = BoundaryOptions::default();
    format!(
        r#"# Sub-word navigation configuration

[boundaries]
# Keep an uppercase letter together with the lowercase letters after it
# (getValue -> get|Value rather than get|V|alue)
recognize_pascal = {}

# Stop between an all-caps run and the capitalized word after it
# (HTTPClient -> HTTP|Client). Needs recognize_pascal.
stop_between_upper_and_pascal = {}

# Stop between every pair of adjacent operators (+= -> +|=)
stop_between_operators = {}

# Stop between every pair of adjacent brackets (() -> (|))
stop_between_brackets = {}

# Stop between an operator and an adjacent bracket
stop_between_operators_and_brackets = {}

# Where whitespace attaches: {}
skip_connected_whitespace = "{}"

# Where underscores attach: {}
skip_connected_underscores = "{}"

# Where operators attach: {}
skip_connected_operators = "{}"

# Where brackets attach: {}
skip_connected_brackets = "{}"

[output]
# Format used by `split` when --format is not given: "text", "json", "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true
"#,
        d.recognize_pascal,
        d.stop_between_upper_and_pascal,
        d.stop_between_operators,
        d.stop_between_brackets,
        d.stop_between_operators_and_brackets,
        choices(SkipConnectedWhitespace::VARIANTS),
        d.skip_connected_whitespace,
        choices(SkipConnectedUnderscores::VARIANTS),
        d.skip_connected_underscores,
        choices(SkipConnectedOperators::VARIANTS),
        d.skip_connected_operators,
        choices(SkipConnectedBrackets::VARIANTS),
        d.skip_connected_brackets,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml_str(&generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_template_lists_policy_values() {
        let template = generate_template();
        assert!(template.contains(r#""never", "before_anything", "after_anything""#));
        assert!(template.contains(r#"skip_connected_underscores = "after_subwords""#));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("subword.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[boundaries]"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/subword.toml"),
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("Failed to write to"));
    }
}
