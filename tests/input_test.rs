//! Tests for input acquisition and error reporting.

mod common;

use css_color_extractor::error::ExtractError;
use common::{fixtures::sheets, TestRun};
use pretty_assertions::assert_eq;

#[test]
fn test_terminal_without_input_file_is_no_input() {
    let err = TestRun::new().run_err();

    assert!(err.is_no_input());
    assert_eq!(err.to_string(), "No input specified.");
}

#[test]
fn test_empty_pipe_is_no_input() {
    let err = TestRun::piped("").run_err();
    assert!(err.is_no_input());
}

#[test]
fn test_reads_input_file() {
    let output = TestRun::new()
        .with_input_file("theme.scss", sheets::MIXED)
        .run();

    assert_eq!(output.document(), "#fff\nrgb(0,0,0)\nred");
}

#[test]
fn test_piped_stdin_takes_precedence() {
    let output = TestRun::piped("p { color: teal }")
        .with_input_file("theme.css", sheets::MIXED)
        .run();

    assert_eq!(output.document(), "teal");
}

#[test]
fn test_missing_input_file_is_file_error() {
    let err = TestRun::new().with_missing_input("nope.css").run_err();

    match &err {
        ExtractError::File { path, .. } => assert!(path.ends_with("nope.css")),
        other => panic!("Expected File error, got {other:?}"),
    }
    assert!(!err.is_no_input());
}

#[test]
fn test_unwritable_output_is_file_error() {
    let run = TestRun::piped(sheets::MIXED).with_output_file("missing-dir/out.json");

    let err = run.run_err();
    assert!(matches!(err, ExtractError::File { .. }));
    assert!(err.to_string().contains("out.json"));
}

#[test]
fn test_non_css_input_yields_no_colors() {
    let output = TestRun::piped("just some words, nothing to see").run();
    assert_eq!(output.document(), "");
}
