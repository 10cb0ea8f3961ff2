//! Table command implementation

use crate::config::CliConfig;
use crate::CliResult;
use clap::Args;
use std::io::{self, Write};
use subword_core::{CharClass, TableBuilder, TransitionTable};

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// List every context, not only the ones that stop
    #[arg(short, long)]
    pub all: bool,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self, config: &CliConfig) -> CliResult<()> {
        let table = TableBuilder::build(&config.boundaries);
        let stdout = io::stdout();
        self.write_table(&table, &mut stdout.lock())
    }

    /// Write one `prev cur next stop|pass` row per listed context
    pub fn write_table(&self, table: &TransitionTable, out: &mut impl Write) -> CliResult<()> {
        for (prev, cur, next, boundary) in table.contexts() {
            if boundary || self.all {
                let verdict = if boundary { "stop" } else { "pass" };
                writeln!(
                    out,
                    "{:<10} {:<10} {:<10} {verdict}",
                    prev.name(),
                    cur.name(),
                    next.name()
                )?;
            }
        }

        let total = CharClass::COUNT.pow(3);
        writeln!(out, "{} of {total} contexts stop", table.boundary_count())?;
        out.flush()?;
        Ok(())
    }
}
