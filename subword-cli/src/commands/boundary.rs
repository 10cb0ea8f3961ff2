//! Next / prev command implementation

use crate::config::CliConfig;
use crate::CliResult;
use clap::Args;
use subword_core::SubwordNavigator;

/// Arguments for the next and prev commands
#[derive(Debug, Args)]
pub struct BoundaryArgs {
    /// Line of text to scan
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Char column to scan from
    #[arg(short = 'n', long, value_name = "N")]
    pub column: usize,
}

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seek {
    /// Towards the line end
    Next,
    /// Towards the line start
    Prev,
}

impl BoundaryArgs {
    /// Execute the command, printing the resulting column
    pub fn execute(&self, config: &CliConfig, seek: Seek) -> CliResult<()> {
        let navigator = SubwordNavigator::new(config.boundaries);
        println!("{}", self.resolve(&navigator, seek));
        Ok(())
    }

    /// Column the caret lands on
    pub fn resolve(&self, navigator: &SubwordNavigator, seek: Seek) -> usize {
        let column = match seek {
            Seek::Next => navigator.next_boundary(&self.text, self.column),
            Seek::Prev => navigator.prev_boundary(&self.text, self.column),
        };
        log::info!("{seek:?} boundary from column {} is {column}", self.column);
        column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, column: usize) -> BoundaryArgs {
        BoundaryArgs {
            text: text.to_string(),
            column,
        }
    }

    #[test]
    fn test_resolve_both_directions() {
        let navigator = SubwordNavigator::default();
        assert_eq!(args("HTTPClient", 0).resolve(&navigator, Seek::Next), 4);
        assert_eq!(args("HTTPClient", 10).resolve(&navigator, Seek::Prev), 4);
    }

    #[test]
    fn test_resolve_past_line_end() {
        let navigator = SubwordNavigator::default();
        assert_eq!(args("ab", 7).resolve(&navigator, Seek::Next), 8);
        assert_eq!(args("", 0).resolve(&navigator, Seek::Prev), 0);
    }

    #[test]
    fn test_resolve_largest_column() {
        let navigator = SubwordNavigator::default();
        assert_eq!(
            args("ab", usize::MAX).resolve(&navigator, Seek::Next),
            usize::MAX
        );
        assert!(args("ab", usize::MAX).resolve(&navigator, Seek::Prev) <= 2);
    }
}
