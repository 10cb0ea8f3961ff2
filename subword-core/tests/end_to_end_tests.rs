//! End-to-end navigation tests through the public API

use subword_core::{
    BoundaryOptions, SkipConnectedBrackets, SkipConnectedOperators, SkipConnectedUnderscores,
    SkipConnectedWhitespace, SubwordNavigator,
};

fn stops_forward(navigator: &SubwordNavigator, line: &str) -> Vec<usize> {
    let len = line.chars().count();
    let mut stops = Vec::new();
    let mut column = 0;
    while column < len {
        column = navigator.next_boundary(line, column);
        stops.push(column);
    }
    stops
}

fn stops_backward(navigator: &SubwordNavigator, line: &str) -> Vec<usize> {
    let mut stops = Vec::new();
    let mut column = line.chars().count();
    while column > 0 {
        column = navigator.prev_boundary(line, column);
        stops.push(column);
    }
    stops
}

#[test]
fn test_http_client_splits_before_pascal_word() {
    let navigator = SubwordNavigator::default();
    assert_eq!(stops_forward(&navigator, "HTTPClient"), [4, 10]);
    assert_eq!(navigator.split("HTTPClient"), ["HTTP", "Client"]);
}

#[test]
fn test_caps_run_without_upper_and_pascal_stop() {
    let navigator = SubwordNavigator::new(BoundaryOptions {
        stop_between_upper_and_pascal: false,
        ..BoundaryOptions::default()
    });
    assert_eq!(navigator.split("HTTPClient"), ["HTTPClient"]);
}

#[test]
fn test_without_pascal_every_case_change_stops() {
    let navigator = SubwordNavigator::new(BoundaryOptions {
        recognize_pascal: false,
        ..BoundaryOptions::default()
    });
    assert_eq!(navigator.split("parseJson"), ["parse", "J", "son"]);
}

#[test]
fn test_stop_between_operators_isolates_each_operator() {
    let navigator = SubwordNavigator::new(BoundaryOptions {
        stop_between_operators: true,
        ..BoundaryOptions::default()
    });
    assert_eq!(stops_forward(&navigator, "a+-b"), [1, 2, 3, 4]);
    assert_eq!(navigator.split("a+-b"), ["a", "+", "-", "b"]);
}

#[test]
fn test_operator_runs_group_by_default() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.split("x += y"), ["x ", "+= ", "y"]);
}

#[test]
fn test_underscore_attaches_to_preceding_subword() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.next_boundary("foo_bar", 0), 4);
    assert_eq!(navigator.split("foo_bar"), ["foo_", "bar"]);
}

#[test]
fn test_underscore_attaches_to_following_subword() {
    let navigator = SubwordNavigator::new(BoundaryOptions {
        skip_connected_underscores: SkipConnectedUnderscores::BeforeSubwords,
        ..BoundaryOptions::default()
    });
    assert_eq!(navigator.split("foo_bar"), ["foo", "_bar"]);
}

#[test]
fn test_operator_attachment_policies() {
    let after = SubwordNavigator::new(BoundaryOptions {
        skip_connected_operators: SkipConnectedOperators::AfterWords,
        ..BoundaryOptions::default()
    });
    assert_eq!(after.split("self.value"), ["self.", "value"]);

    let before = SubwordNavigator::new(BoundaryOptions {
        skip_connected_operators: SkipConnectedOperators::BeforeWords,
        ..BoundaryOptions::default()
    });
    assert_eq!(before.split("self.value"), ["self", ".value"]);
}

#[test]
fn test_bracket_policies() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.split("call(arg)"), ["call", "(", "arg", ")"]);

    let after = SubwordNavigator::new(BoundaryOptions {
        skip_connected_brackets: SkipConnectedBrackets::AfterWords,
        ..BoundaryOptions::default()
    });
    assert_eq!(after.split("call(arg)"), ["call(", "arg)"]);
}

#[test]
fn test_adjacent_brackets_split_by_default() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.split("f() x"), ["f", "(", ") ", "x"]);

    let grouped = SubwordNavigator::new(BoundaryOptions {
        stop_between_brackets: false,
        ..BoundaryOptions::default()
    });
    assert_eq!(grouped.split("f() x"), ["f", "() ", "x"]);
}

#[test]
fn test_whitespace_attachment() {
    let never = SubwordNavigator::new(BoundaryOptions {
        skip_connected_whitespace: SkipConnectedWhitespace::Never,
        ..BoundaryOptions::default()
    });
    assert_eq!(never.split("let  x"), ["let", "  ", "x"]);

    let before = SubwordNavigator::new(BoundaryOptions {
        skip_connected_whitespace: SkipConnectedWhitespace::BeforeAnything,
        ..BoundaryOptions::default()
    });
    assert_eq!(before.split("let  x"), ["let", "  x"]);
}

#[test]
fn test_backward_mirrors_forward_stops() {
    let navigator = SubwordNavigator::default();
    let line = "parseHTTPResponse";
    assert_eq!(stops_forward(&navigator, line), [5, 9, 17]);
    assert_eq!(stops_backward(&navigator, line), [9, 5, 0]);
}

#[test]
fn test_empty_line() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.next_boundary("", 0), 1);
    assert_eq!(navigator.prev_boundary("", 0), 0);
    assert!(navigator.split("").is_empty());
}

#[test]
fn test_reconfigure_changes_results() {
    let navigator = SubwordNavigator::default();
    assert_eq!(navigator.split("a+-b"), ["a", "+-", "b"]);

    navigator.configure(BoundaryOptions {
        stop_between_operators: true,
        ..BoundaryOptions::default()
    });
    assert_eq!(navigator.split("a+-b"), ["a", "+", "-", "b"]);
}
