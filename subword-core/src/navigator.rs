//! Host-facing navigation entry point
//!
//! [`SubwordNavigator`] owns the published transition table. Reconfiguring
//! builds a fresh table and swaps the shared `Arc` in one step; scans that
//! already cloned the previous `Arc` finish against it undisturbed.

use crate::builder::TableBuilder;
use crate::options::BoundaryOptions;
use crate::scanner::BoundaryScanner;
use crate::table::TransitionTable;
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
struct Published {
    options: BoundaryOptions,
    table: Arc<TransitionTable>,
}

/// Sub-word navigation over single lines of text
///
/// Columns are char indices into the line.
#[derive(Debug)]
pub struct SubwordNavigator {
    published: RwLock<Published>,
}

impl Default for SubwordNavigator {
    fn default() -> Self {
        Self::new(BoundaryOptions::default())
    }
}

impl SubwordNavigator {
    /// Create a navigator configured with `options`
    pub fn new(options: BoundaryOptions) -> Self {
        let table = Arc::new(TableBuilder::build(&options));
        log::debug!(
            "built initial transition table ({} boundary contexts)",
            table.boundary_count()
        );
        Self {
            published: RwLock::new(Published { options, table }),
        }
    }

    /// Rebuild the table for `options` and publish it
    pub fn configure(&self, options: BoundaryOptions) {
        let table = Arc::new(TableBuilder::build(&options));
        log::debug!(
            "rebuilt transition table ({} boundary contexts)",
            table.boundary_count()
        );

        // The guarded value is replaced wholesale, so a poisoned lock still
        // holds a consistent snapshot.
        let mut published = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *published = Published { options, table };
    }

    /// Options behind the current table
    pub fn options(&self) -> BoundaryOptions {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .options
    }

    /// Currently published table
    pub fn table(&self) -> Arc<TransitionTable> {
        Arc::clone(
            &self
                .published
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .table,
        )
    }

    /// Column of the next boundary after `column` in `line`
    ///
    /// A result equal to the line length means the caret should move to the
    /// line end; the host crosses to the next line from there.
    pub fn next_boundary(&self, line: &str, column: usize) -> usize {
        let text: Vec<char> = line.chars().collect();
        self.next_boundary_in(&text, column)
    }

    /// Column of the previous boundary before `column` in `line`
    pub fn prev_boundary(&self, line: &str, column: usize) -> usize {
        let text: Vec<char> = line.chars().collect();
        self.prev_boundary_in(&text, column)
    }

    /// [`next_boundary`](Self::next_boundary) over pre-split characters
    pub fn next_boundary_in(&self, text: &[char], column: usize) -> usize {
        let table = self.table();
        let result = BoundaryScanner::new(&table).scan_forward(text, column);
        log::trace!("next boundary from {column} -> {result}");
        result
    }

    /// [`prev_boundary`](Self::prev_boundary) over pre-split characters
    pub fn prev_boundary_in(&self, text: &[char], column: usize) -> usize {
        let table = self.table();
        let result = BoundaryScanner::new(&table).scan_backward(text, column);
        log::trace!("prev boundary from {column} -> {result}");
        result
    }

    /// Char ranges of every sub-word in `line`
    pub fn segments(&self, line: &str) -> Vec<Range<usize>> {
        let text: Vec<char> = line.chars().collect();
        let table = self.table();
        BoundaryScanner::new(&table).segments(&text).collect()
    }

    /// Sub-words of `line` as string slices
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        // Map char offsets back to byte offsets
        let mut byte_offsets: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
        byte_offsets.push(line.len());

        self.segments(line)
            .into_iter()
            .map(|range| &line[byte_offsets[range.start]..byte_offsets[range.end]])
            .collect()
    }
}
