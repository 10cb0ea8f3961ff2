//! Property tests for the boundary scanner and table builder

use proptest::prelude::*;
use proptest::sample::select;
use subword_core::{
    BoundaryOptions, BoundaryScanner, SkipConnectedBrackets, SkipConnectedOperators,
    SkipConnectedUnderscores, SkipConnectedWhitespace, TableBuilder,
};

/// Characters covering every class, including a non-ASCII letter pair
const ALPHABET: &[char] = &[
    'a', 'b', 'z', 'A', 'B', 'Z', '0', '7', '_', ' ', '\t', '(', ')', '{', '.', '+', '=', '#',
    '$', 'é', 'Ä',
];

/// One representative per class that the default options never split
const RUN_CHARS: &[char] = &['a', 'Q', '5', '_', ' ', '#', '+'];

fn line() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(select(ALPHABET), 0..40)
}

fn options() -> impl Strategy<Value = BoundaryOptions> {
    (
        (any::<bool>(), any::<bool>(), any::<bool>()),
        (any::<bool>(), any::<bool>()),
        select(SkipConnectedWhitespace::VARIANTS),
        select(SkipConnectedUnderscores::VARIANTS),
        select(SkipConnectedOperators::VARIANTS),
        select(SkipConnectedBrackets::VARIANTS),
    )
        .prop_map(|((pascal, upper, ops), (brackets, ops_brackets), ws, us, op, br)| {
            BoundaryOptions {
                recognize_pascal: pascal,
                stop_between_upper_and_pascal: upper,
                stop_between_operators: ops,
                stop_between_brackets: brackets,
                stop_between_operators_and_brackets: ops_brackets,
                skip_connected_whitespace: ws,
                skip_connected_underscores: us,
                skip_connected_operators: op,
                skip_connected_brackets: br,
            }
        })
}

proptest! {
    #[test]
    fn build_is_deterministic(options in options()) {
        let a = TableBuilder::build(&options);
        let b = TableBuilder::build(&options);
        prop_assert_eq!(a.as_words(), b.as_words());
    }

    #[test]
    fn forward_always_advances(options in options(), text in line()) {
        let table = TableBuilder::build(&options);
        let scanner = BoundaryScanner::new(&table);
        for index in 0..=text.len() {
            let next = scanner.scan_forward(&text, index);
            prop_assert!(next > index);
            if index < text.len() {
                prop_assert!(next <= text.len());
            }
        }
    }

    #[test]
    fn backward_always_retreats(options in options(), text in line()) {
        let table = TableBuilder::build(&options);
        let scanner = BoundaryScanner::new(&table);
        prop_assert_eq!(scanner.scan_backward(&text, 0), 0);
        for index in 1..=text.len() + 2 {
            prop_assert!(scanner.scan_backward(&text, index) < index);
        }
    }

    #[test]
    fn backward_from_forward_result_returns_at_or_before_start(
        options in options(),
        text in line(),
    ) {
        let table = TableBuilder::build(&options);
        let scanner = BoundaryScanner::new(&table);
        for index in 0..text.len() {
            let boundary = scanner.scan_forward(&text, index);
            let back = scanner.scan_backward(&text, boundary);
            prop_assert!(back <= index, "index {} -> {} -> {}", index, boundary, back);
        }
    }

    #[test]
    fn single_class_runs_never_split(
        ch in select(RUN_CHARS),
        len in 4usize..30,
    ) {
        let table = TableBuilder::build(&BoundaryOptions::default());
        let scanner = BoundaryScanner::new(&table);
        let text = vec![ch; len];
        // Degenerate positions near the end return index + 1 without scanning
        for index in 0..len - 2 {
            prop_assert_eq!(scanner.scan_forward(&text, index), len);
        }
    }

    #[test]
    fn segments_tile_the_line(options in options(), text in line()) {
        let table = TableBuilder::build(&options);
        let scanner = BoundaryScanner::new(&table);
        let mut expected_start = 0;
        for range in scanner.segments(&text) {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(range.end > range.start);
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, text.len());
    }
}
