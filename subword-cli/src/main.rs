//! Subword command-line entry point

use clap::Parser;
use subword_cli::commands::{Commands, GlobalArgs};

/// Sub-word boundary navigation for code and text
#[derive(Debug, Parser)]
#[command(name = "subword", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    globals: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    cli.globals.init_logging();

    if let Err(e) = cli.command.execute(&cli.globals) {
        log::debug!("command failed: {e:?}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
