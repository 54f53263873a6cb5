//! Error message quality tests.
//!
//! Ensures diagnostics point at the offending text and say how to fix it.

#![allow(clippy::pedantic)]

use envsample::miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use envsample::{Converter, Error};

fn render(err: &Error) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(200)
        .render_report(&mut out, err)
        .expect("render should succeed");
    out
}

#[test]
fn test_unterminated_quote_report() {
    let sample = "PORT=8080\nDATABASE_URL=\"postgres://localhost\n";
    let err = Converter::new()
        .convert_str("broken.env", sample)
        .unwrap_err();

    let display = err.to_string();
    assert!(
        display.contains("line 2") && display.contains("broken.env"),
        "Display should name the line and file: {display}"
    );

    let report = render(&err);
    assert!(report.contains("envsample::malformed_line"), "{report}");
    assert!(report.contains("unterminated double-quoted value"), "{report}");
    assert!(report.contains("close the quote"), "{report}");
    assert!(report.contains("DATABASE_URL"), "snippet should show the line: {report}");
}

#[test]
fn test_trailing_content_report() {
    let err = Converter::new()
        .convert_str("trailing.env", "NAME='value' extra\n")
        .unwrap_err();

    let report = render(&err);
    assert!(
        report.contains("unexpected text after closing single quote"),
        "{report}"
    );
    assert!(report.contains("start a comment"), "{report}");
}

#[test]
fn test_unreadable_input_has_help_and_cause() {
    let dir = tempfile::tempdir().unwrap();
    let err = Converter::new()
        .convert_file(dir.path().join("nope.env"))
        .unwrap_err();

    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("envsample::unreadable_input")
    );
    assert!(err.help().is_some());

    let report = render(&err);
    assert!(report.contains("nope.env"), "{report}");
}

#[test]
fn test_invalid_dict_var_report() {
    let err = Converter::new().dict_var("my-env").unwrap_err();

    assert!(err.to_string().contains("\"my-env\""));
    let report = render(&err);
    assert!(report.contains("hostvars.app"), "{report}");
}
