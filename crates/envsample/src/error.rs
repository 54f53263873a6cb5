//! Error types for sample conversion.
//!
//! | Variant | When It Occurs |
//! |---------|----------------|
//! | [`Error::UnreadableInput`] | Sample file missing, unreadable, or not UTF-8 |
//! | [`Error::MalformedLine`] | A line starts like an assignment but cannot be completed |
//! | [`Error::InvalidDictVarName`] | The dictionary variable name is not a dotted identifier |
//!
//! Any error aborts the whole conversion; no partial template is returned.
//! Render with `miette::Report::from(err)` for source snippets:
//!
//! ```text
//! envsample::malformed_line
//!
//!   × malformed assignment on line 3 of .env.sample: unterminated double-quoted value
//!    ╭─[.env.sample:3:14]
//!  2 │ PORT=8080
//!  3 │ DATABASE_URL="postgres://localhost
//!    ·              ─────────┬──────────
//!    ·                       ╰── unterminated double-quoted value
//!    ╰────
//!   help: close the quote before the end of the line
//! ```

use std::io;
use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};

use crate::scanner::{LineError, LineErrorKind};

/// Errors returned while turning a sample into a template.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
    /// The sample could not be read.
    #[error("failed to read dotenv sample {path}")]
    #[diagnostic(
        code(envsample::unreadable_input),
        help("check that the file exists, is readable, and contains UTF-8 text")
    )]
    UnreadableInput {
        /// Path as given by the caller.
        path: String,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line that begins like an assignment could not be parsed.
    #[error("malformed assignment on line {line} of {sample}: {reason}")]
    #[diagnostic(code(envsample::malformed_line))]
    MalformedLine {
        /// Name of the sample (usually its path).
        sample: String,

        /// 1-based line number.
        line: usize,

        /// The offending line, without its terminator.
        content: String,

        /// What went wrong.
        reason: LineErrorKind,

        /// The whole sample, for snippet rendering.
        #[source_code]
        src: NamedSource<String>,

        /// Location of the offending value.
        #[label("{reason}")]
        span: SourceSpan,

        /// Suggestion for how to fix.
        #[help]
        help: String,
    },

    /// The dictionary variable name cannot be used in a placeholder.
    #[error("invalid dictionary variable name {name:?}")]
    #[diagnostic(
        code(envsample::invalid_dict_var),
        help("use an identifier such as `env`, or a dotted path such as `hostvars.app`")
    )]
    InvalidDictVarName {
        /// The rejected name.
        name: String,
    },
}

/// Result alias for conversion operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Creates an `UnreadableInput` error for `path`.
    pub fn unreadable(path: &Path, source: io::Error) -> Self {
        Self::UnreadableInput {
            path: path.display().to_string(),
            source,
        }
    }

    /// Lifts a [`LineError`] into a `MalformedLine` error.
    ///
    /// `line_offset` is the byte offset of the line within `text`.
    pub fn malformed(
        sample: &str,
        text: &str,
        line: usize,
        line_offset: usize,
        content: &str,
        err: &LineError,
    ) -> Self {
        let help = match err.kind {
            LineErrorKind::UnterminatedQuote(_) => {
                "close the quote before the end of the line".to_owned()
            }
            LineErrorKind::TrailingContent(_) => {
                "remove the text after the closing quote, or start a comment with ` #`".to_owned()
            }
        };

        Self::MalformedLine {
            sample: sample.to_owned(),
            line,
            content: content.to_owned(),
            reason: err.kind,
            src: NamedSource::new(sample, text.to_owned()),
            span: SourceSpan::new(
                (line_offset + err.span.start).into(),
                err.span.end - err.span.start,
            ),
            help,
        }
    }

    /// Creates an `InvalidDictVarName` error.
    pub fn invalid_dict_var(name: impl Into<String>) -> Self {
        Self::InvalidDictVarName { name: name.into() }
    }
}
