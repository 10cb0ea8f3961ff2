//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for file processing
///
/// Safe to share across worker threads; every method takes `&self`.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; a disabled reporter never draws anything
    pub fn new(enabled: bool, total_files: u64) -> Self {
        if !enabled {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Whether a bar is being drawn
    pub fn is_enabled(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Split: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_is_inert() {
        let reporter = ProgressReporter::new(false, 3);
        assert!(!reporter.is_enabled());
        reporter.file_completed("a.rs");
        reporter.finish();
    }

    #[test]
    fn test_enabled_reporter_counts_files() {
        let reporter = ProgressReporter::new(true, 2);
        assert!(reporter.is_enabled());
        reporter.file_completed("a.rs");
        reporter.file_completed("b.rs");
        if let Some(pb) = &reporter.progress_bar {
            assert_eq!(pb.position(), 2);
        }
        reporter.finish();
    }
}
