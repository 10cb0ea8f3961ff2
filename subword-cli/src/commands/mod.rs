//! CLI command implementations

use crate::config::CliConfig;
use crate::CliResult;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod boundary;
pub mod edit;
pub mod generate_config;
pub mod split;
pub mod table;
pub mod validate;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file
    #[arg(long, value_name = "FILE", env = "SUBWORD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Override a boundary option (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }

    /// Load the configuration these flags describe
    pub fn load_config(&self) -> CliResult<CliConfig> {
        CliConfig::load(self.config.as_deref(), &self.overrides)
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split every line of the input files into sub-words
    Split(split::SplitArgs),

    /// Print the column of the next sub-word boundary
    Next(boundary::BoundaryArgs),

    /// Print the column of the previous sub-word boundary
    Prev(boundary::BoundaryArgs),

    /// List the boundary contexts of the configured table
    Table(table::TableArgs),

    /// Write a configuration file with the default options
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check that a configuration file parses
    Validate(validate::ValidateArgs),

    /// Run one editor command on a piece of text
    Edit(edit::EditArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        log::debug!("Arguments: {self:?}");

        match self {
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Split(args) => args.execute(&globals.load_config()?),
            Commands::Next(args) => args.execute(&globals.load_config()?, boundary::Seek::Next),
            Commands::Prev(args) => args.execute(&globals.load_config()?, boundary::Seek::Prev),
            Commands::Table(args) => args.execute(&globals.load_config()?),
            Commands::Edit(args) => args.execute(&globals.load_config()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globals(overrides: &[&str]) -> GlobalArgs {
        GlobalArgs {
            config: None,
            overrides: overrides.iter().map(|s| s.to_string()).collect(),
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_load_config_without_file() {
        let config = globals(&[]).load_config().unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_config_with_overrides() {
        let config = globals(&["stop_between_brackets=false"])
            .load_config()
            .unwrap();
        assert!(!config.boundaries.stop_between_brackets);
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Next(boundary::BoundaryArgs {
            text: "fooBar".to_string(),
            column: 0,
        });

        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Next"));
        assert!(debug_str.contains("fooBar"));
    }
}
