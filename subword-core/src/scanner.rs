//! Forward and backward boundary scanning
//!
//! Both directions slide a `(prev, cur, next)` class window over one line
//! and look up the transition table once per character. Positions are char
//! indices into the line; a boundary at `i` means the caret stops just
//! before `text[i]`.

use crate::char_class::{CharClass, CharClassifier, StandardClassifier};
use crate::table::TransitionTable;
use std::ops::Range;

/// Scans a single line against a transition table
#[derive(Debug, Clone, Copy)]
pub struct BoundaryScanner<'t, C = StandardClassifier> {
    table: &'t TransitionTable,
    classifier: C,
}

impl<'t> BoundaryScanner<'t, StandardClassifier> {
    /// Create a scanner using the standard classifier
    pub fn new(table: &'t TransitionTable) -> Self {
        Self::with_classifier(table, StandardClassifier)
    }
}

impl<'t, C: CharClassifier> BoundaryScanner<'t, C> {
    /// Create a scanner with a custom classifier
    pub fn with_classifier(table: &'t TransitionTable, classifier: C) -> Self {
        Self { table, classifier }
    }

    #[inline]
    fn class_at(&self, text: &[char], index: usize) -> CharClass {
        self.classifier.classify(text[index])
    }

    /// Find the next boundary strictly after `index`
    ///
    /// Returns `text.len()` when the line end is the next stop. Lines with at
    /// most one character past `index` return `index + 1` without scanning,
    /// so the result may exceed `text.len()` when `index` is already at or
    /// beyond the end. The result saturates at `usize::MAX`.
    pub fn scan_forward(&self, text: &[char], index: usize) -> usize {
        let length = text.len();
        let after = index.saturating_add(1);
        if after >= length.saturating_sub(1) {
            return after;
        }
        let last_index = length - 1;

        let mut prev = self.class_at(text, index);
        let mut pos = index + 1;
        let mut cur = self.class_at(text, pos);

        while pos < last_index {
            let next = self.class_at(text, pos + 1);

            if self.table.is_boundary(prev, cur, next) {
                return pos;
            }

            prev = cur;
            cur = next;
            pos += 1;
        }

        // Treat the line end as a synthetic line break
        if !self.table.is_boundary(prev, cur, CharClass::Linebreak) {
            pos += 1;
        }

        pos
    }

    /// Find the previous boundary strictly before `index`
    ///
    /// Indices past the end of the line are treated as sitting at a
    /// synthetic trailing line break. Returns 0 when no earlier boundary
    /// exists.
    pub fn scan_backward(&self, text: &[char], index: usize) -> usize {
        if index <= 1 {
            return 0;
        }

        let length = text.len();
        let mut next = CharClass::Linebreak;
        let mut cur = CharClass::Linebreak;

        if index < length {
            next = self.class_at(text, index);
        }

        let mut pos = index - 1;
        if pos < length {
            cur = self.class_at(text, pos);
        } else {
            pos = length;
        }

        while pos > 0 {
            let prev = self.class_at(text, pos - 1);

            if self.table.is_boundary(prev, cur, next) {
                break;
            }

            next = cur;
            cur = prev;
            pos -= 1;
        }

        pos
    }

    /// Iterate over the sub-word ranges of a line, left to right
    pub fn segments<'a>(&self, text: &'a [char]) -> Segments<'a, 't, C>
    where
        C: Clone,
    {
        Segments {
            scanner: self.clone(),
            text,
            pos: 0,
        }
    }
}

/// Iterator over sub-word ranges produced by repeated forward scans
#[derive(Debug, Clone)]
pub struct Segments<'a, 't, C = StandardClassifier> {
    scanner: BoundaryScanner<'t, C>,
    text: &'a [char],
    pos: usize,
}

impl<C: CharClassifier> Iterator for Segments<'_, '_, C> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = self.text.len();
        if self.pos >= length {
            return None;
        }

        let start = self.pos;
        let end = self.scanner.scan_forward(self.text, start).min(length);
        self.pos = end;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::options::{BoundaryOptions, SkipConnectedUnderscores};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn split(options: &BoundaryOptions, line: &str) -> Vec<String> {
        let table = TableBuilder::build(options);
        let scanner = BoundaryScanner::new(&table);
        let text = chars(line);
        scanner
            .segments(&text)
            .map(|range| text[range].iter().collect())
            .collect()
    }

    #[test]
    fn test_degenerate_inputs() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);

        assert_eq!(scanner.scan_forward(&[], 0), 1);
        assert_eq!(scanner.scan_backward(&[], 0), 0);
        assert_eq!(scanner.scan_backward(&[], 7), 0);

        let text = chars("ab");
        assert_eq!(scanner.scan_forward(&text, 0), 1);
        assert_eq!(scanner.scan_forward(&text, 1), 2);
        assert_eq!(scanner.scan_forward(&text, 2), 3);
        assert_eq!(scanner.scan_backward(&text, 1), 0);
    }

    #[test]
    fn test_extreme_indices_do_not_overflow() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);

        assert_eq!(scanner.scan_forward(&[], usize::MAX), usize::MAX);
        let text = chars("ab");
        assert_eq!(scanner.scan_forward(&text, usize::MAX), usize::MAX);
        assert_eq!(scanner.scan_forward(&text, usize::MAX - 1), usize::MAX);

        let text = chars("fooBar");
        assert_eq!(
            scanner.scan_backward(&text, usize::MAX),
            scanner.scan_backward(&text, text.len() + 1)
        );
    }

    #[test]
    fn test_forward_pascal_and_caps() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = chars("HTTPClient");

        assert_eq!(scanner.scan_forward(&text, 0), 4);
        assert_eq!(scanner.scan_forward(&text, 4), 10);
    }

    #[test]
    fn test_backward_pascal_and_caps() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = chars("HTTPClient");

        assert_eq!(scanner.scan_backward(&text, 10), 4);
        assert_eq!(scanner.scan_backward(&text, 4), 0);
        assert_eq!(scanner.scan_backward(&text, 7), 4);
    }

    #[test]
    fn test_backward_from_past_the_end() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = chars("ab");

        // (lower, linebreak, linebreak) is a boundary, so the caret lands on the line end
        assert_eq!(scanner.scan_backward(&text, 5), 2);
    }

    #[test]
    fn test_trailing_bracket_stops_before_it() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = chars("foo(");

        assert_eq!(scanner.scan_forward(&text, 0), 3);
    }

    #[test]
    fn test_trailing_whitespace_runs_to_line_end() {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = chars("foo  ");

        assert_eq!(scanner.scan_forward(&text, 0), 5);
    }

    #[test]
    fn test_segments_default_options() {
        assert_eq!(
            split(&BoundaryOptions::default(), "MyHTTPClient_v2"),
            ["My", "HTTP", "Client_", "v", "2"]
        );
        assert_eq!(
            split(&BoundaryOptions::default(), "foo bar baz"),
            ["foo ", "bar ", "baz"]
        );
    }

    #[test]
    fn test_segments_without_underscore_attachment() {
        let options = BoundaryOptions {
            skip_connected_underscores: SkipConnectedUnderscores::Never,
            ..BoundaryOptions::default()
        };
        assert_eq!(
            split(&options, "MyHTTPClient_v2"),
            ["My", "HTTP", "Client", "_", "v", "2"]
        );
    }

    #[test]
    fn test_segments_empty_line() {
        assert!(split(&BoundaryOptions::default(), "").is_empty());
    }
}
