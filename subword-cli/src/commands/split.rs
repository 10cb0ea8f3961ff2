//! Split command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use crate::CliResult;
use anyhow::Context;
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use subword_core::SubwordNavigator;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,
}

/// Lines of one input file
struct SplitFile {
    name: String,
    lines: Vec<String>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, config: &CliConfig) -> CliResult<()> {
        log::info!("Starting sub-word split");

        let files = resolve_patterns(&self.input)?;
        let format = self.format.unwrap_or(config.output.default_format);

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let navigator = SubwordNavigator::new(config.boundaries);
        split_files(&navigator, &files, self.progress, formatter.as_mut())?;
        formatter.finish()?;

        log::info!("Split {} files", files.len());
        Ok(())
    }
}

/// Read `files` in parallel and feed their sub-words to `formatter` in
/// input order
pub fn split_files(
    navigator: &SubwordNavigator,
    files: &[PathBuf],
    show_progress: bool,
    formatter: &mut dyn OutputFormatter,
) -> CliResult<()> {
    let progress = ProgressReporter::new(show_progress, files.len() as u64);

    let loaded = files
        .par_iter()
        .map(|path| {
            let file = load(path)?;
            progress.file_completed(&file.name);
            Ok(file)
        })
        .collect::<CliResult<Vec<_>>>();
    progress.finish();

    for file in loaded? {
        log::debug!("{}: {} lines", file.name, file.lines.len());
        for (number, line) in file.lines.iter().enumerate() {
            formatter.format_line(&file.name, number, &navigator.split(line))?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> CliResult<SplitFile> {
    Ok(SplitFile {
        name: path.display().to_string(),
        lines: FileReader::read_lines(path)?,
    })
}
