//! End-to-end conversion tests against sample files on disk.

#![allow(clippy::pedantic)]

use envsample::{Converter, DefaultValue, Error, convert_file, scan_line};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write test file");
    file
}

fn convert(content: &str) -> String {
    let file = sample_file(content);
    convert_file(file.path(), "env").expect("conversion should succeed")
}

fn default_text(line: &str) -> Option<String> {
    scan_line(line)
        .expect("line should scan")
        .expect("line should be an assignment")
        .default
        .text()
        .map(str::to_owned)
}

// ============================================================================
// Documented Examples
// ============================================================================

#[test]
fn test_required_variable() {
    assert_eq!(convert("VAR=\n"), "VAR={{ env.VAR | string | quote }}\n");
}

#[test]
fn test_bare_default() {
    assert_eq!(
        convert("VAR=abc\n"),
        "VAR={{ env.VAR | default('abc') | string | quote }}\n"
    );
}

#[test]
fn test_empty_default_is_not_required() {
    assert_eq!(
        convert("VAR=\"\"\n"),
        "VAR={{ env.VAR | default(\"\") | string | quote }}\n"
    );
    assert_eq!(
        convert("VAR=''\n"),
        "VAR={{ env.VAR | default('') | string | quote }}\n"
    );
}

#[test]
fn test_hash_handling() {
    assert_eq!(default_text("VAR=abc#def").as_deref(), Some("abc#def"));
    assert_eq!(default_text("VAR=abc #def").as_deref(), Some("abc"));
    assert_eq!(default_text("VAR=\"abc #def\"").as_deref(), Some("abc #def"));

    assert_eq!(
        convert("VAR=abc#def\n"),
        "VAR={{ env.VAR | default('abc#def') | string | quote }}\n"
    );
    assert_eq!(
        convert("VAR=abc #def\n"),
        "VAR={{ env.VAR | default('abc') | string | quote }}\n"
    );
    assert_eq!(
        convert("VAR=\"abc #def\"\n"),
        "VAR={{ env.VAR | default(\"abc #def\") | string | quote }}\n"
    );
}

#[test]
fn test_trailing_comment_only_is_required() {
    assert_eq!(
        scan_line("VAR= # fill me in").unwrap().unwrap().default,
        DefaultValue::Absent
    );
    assert_eq!(
        convert("VAR=   # fill me in\n"),
        "VAR={{ env.VAR | string | quote }}\n"
    );
}

// ============================================================================
// Realistic Sample
// ============================================================================

const LARAVEL_SAMPLE: &str = r#"# Application
APP_NAME=Platform
APP_ENV=local
APP_KEY=
APP_DEBUG=true # disable in production

# Database
DB_CONNECTION=mysql
DB_HOST=127.0.0.1
DB_PASSWORD=""
DB_DSN='mysql:host=db;port=3306'
    INDENTED = value with spaces   # trailing

MAIL_FROM="Platform <noreply@example.com>"
COLOR=#ffffff
"#;

#[test]
fn test_realistic_sample() {
    let expected = "\
APP_NAME={{ env.APP_NAME | default('Platform') | string | quote }}
APP_ENV={{ env.APP_ENV | default('local') | string | quote }}
APP_KEY={{ env.APP_KEY | string | quote }}
APP_DEBUG={{ env.APP_DEBUG | default('true') | string | quote }}
DB_CONNECTION={{ env.DB_CONNECTION | default('mysql') | string | quote }}
DB_HOST={{ env.DB_HOST | default('127.0.0.1') | string | quote }}
DB_PASSWORD={{ env.DB_PASSWORD | default(\"\") | string | quote }}
DB_DSN={{ env.DB_DSN | default('mysql:host=db;port=3306') | string | quote }}
INDENTED={{ env.INDENTED | default('value with spaces') | string | quote }}
MAIL_FROM={{ env.MAIL_FROM | default(\"Platform <noreply@example.com>\") | string | quote }}
COLOR={{ env.COLOR | string | quote }}
";
    assert_eq!(convert(LARAVEL_SAMPLE), expected);
}

#[test]
fn test_dict_var_changes_only_prefix() {
    let file = sample_file(LARAVEL_SAMPLE);
    let with_env = convert_file(file.path(), "env").unwrap();
    let with_cfg = convert_file(file.path(), "cfg").unwrap();

    assert_ne!(with_env, with_cfg);
    assert_eq!(with_cfg.replace("{{ cfg.", "{{ env."), with_env);
    assert_eq!(with_env.matches("{{ env.").count(), with_env.lines().count());
}

#[test]
fn test_conversion_is_deterministic() {
    let file = sample_file(LARAVEL_SAMPLE);
    let converter = Converter::new().dict_var("vars.app").unwrap();

    let first = converter.convert_file(file.path()).unwrap();
    for _ in 0..5 {
        assert_eq!(converter.convert_file(file.path()).unwrap(), first);
    }
}

#[test]
fn test_empty_sample_produces_empty_template() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("# only comments\n\n"), "");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_file_is_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.env");

    let err = convert_file(&path, "env").unwrap_err();
    match err {
        Error::UnreadableInput { path: p, source } => {
            assert!(p.contains("does-not-exist.env"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected UnreadableInput, got {other:?}"),
    }
}

#[test]
fn test_non_utf8_file_is_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.env");
    fs::write(&path, b"NAME=caf\xe9\n").unwrap();

    assert!(matches!(
        convert_file(&path, "env"),
        Err(Error::UnreadableInput { .. })
    ));
}

#[test]
fn test_malformed_line_aborts_whole_conversion() {
    let file = sample_file("GOOD=1\nBAD=\"never closed\nALSO_GOOD=2\n");
    let err = convert_file(file.path(), "env").unwrap_err();

    match err {
        Error::MalformedLine { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "BAD=\"never closed");
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn test_text_after_closing_quote_is_malformed() {
    let file = sample_file("VAR=\"abc\" def\n");
    assert!(matches!(
        convert_file(file.path(), "env"),
        Err(Error::MalformedLine { line: 1, .. })
    ));
}

#[test]
fn test_invalid_dict_var_checked_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.env");

    assert!(matches!(
        convert_file(&path, "env }}{{"),
        Err(Error::InvalidDictVarName { .. })
    ));
}
