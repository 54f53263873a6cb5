//! Line scanner for dotenv sample files.
//!
//! [`scan_line`] reads one physical line and either recognizes a variable
//! assignment, reports that the line has nothing to offer (blank lines,
//! comments, anything that is not `NAME=...`), or rejects a line that starts
//! like an assignment but cannot be completed.
//!
//! # Grammar
//!
//! | Line | Result |
//! |------|--------|
//! | `VAR=` | [`DefaultValue::Absent`] |
//! | `VAR=abc` | bare literal `abc` |
//! | `VAR=abc#def` | bare literal `abc#def` |
//! | `VAR=abc #def` | bare literal `abc` |
//! | `VAR="abc #def"` | double-quoted literal `abc #def` |
//! | `VAR=''` | [`DefaultValue::Empty`] |
//! | `# comment` | nothing |
//!
//! The scanner is a single pass over the characters of the line. Each state
//! owns exactly one capture, so a line can never yield both a quoted and a
//! bare default.

use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use crate::quote;

/// Quote character that delimited a default value in the sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QuoteStyle {
    /// `"value"`
    Double,

    /// `'value'`
    Single,
}

impl QuoteStyle {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Self::Double),
            '\'' => Some(Self::Single),
            _ => None,
        }
    }
}

impl Display for QuoteStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => f.write_str("double"),
            Self::Single => f.write_str("single"),
        }
    }
}

/// The default a sample line declares for its variable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DefaultValue {
    /// Nothing after `=`: the variable is required at render time.
    Absent,

    /// An explicit `""` or `''`: the variable defaults to the empty string.
    Empty(QuoteStyle),

    /// Any other default text.
    Literal {
        /// Text between the quotes, or the bare value with any trailing
        /// comment and surrounding whitespace removed. Backslash escapes
        /// inside quotes are kept as written.
        text: String,

        /// `None` for a bare value.
        quote: Option<QuoteStyle>,
    },
}

impl DefaultValue {
    /// Returns `true` when rendering must be given a value.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the default text without delimiters, if any was declared.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Empty(_) => Some(""),
            Self::Literal { text, .. } => Some(text),
        }
    }

    /// Normalizes the default into a quoted literal for a `default(...)` filter.
    ///
    /// Quoted defaults are reproduced with their original delimiters. Bare
    /// defaults are shell-quoted with [`quote::shell_quote`] and wrapped in
    /// single quotes when the shell form is not already quoted. Returns
    /// `None` for [`DefaultValue::Absent`].
    #[must_use]
    pub fn template_literal(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Empty(style) => {
                let q = style.as_char();
                Some(format!("{q}{q}"))
            }
            Self::Literal {
                text,
                quote: Some(style),
            } => {
                let q = style.as_char();
                Some(format!("{q}{text}{q}"))
            }
            Self::Literal { text, quote: None } => {
                let quoted = quote::shell_quote(text);
                if quoted.starts_with(['\'', '"']) {
                    Some(quoted.into_owned())
                } else {
                    Some(format!("'{quoted}'"))
                }
            }
        }
    }
}

/// A variable assignment recognized in a sample line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VariableSpec {
    /// Variable name: one or more letters, digits or underscores.
    pub name: String,

    /// Declared default.
    pub default: DefaultValue,
}

impl VariableSpec {
    /// Creates a spec from its parts.
    pub fn new(name: impl Into<String>, default: DefaultValue) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }
}

/// Why a line that looks like an assignment was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LineErrorKind {
    /// The opening quote of the value is never closed.
    #[error("unterminated {0}-quoted value")]
    UnterminatedQuote(QuoteStyle),

    /// Something other than whitespace or a comment follows the closing quote.
    #[error("unexpected text after closing {0} quote")]
    TrailingContent(QuoteStyle),
}

/// A rejected line, with the byte range of the offending text in the line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct LineError {
    /// What went wrong.
    pub kind: LineErrorKind,

    /// Byte range within the line.
    pub span: Range<usize>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    BeforeName,
    InName,
    AfterName,
    BeforeValue,
    InQuotedValue(QuoteStyle),
    AfterQuotedValue(QuoteStyle),
    InBareValue,
    Done,
}

#[derive(Clone, Debug)]
enum Capture {
    Nothing,
    Bare(Range<usize>),
    Quoted(QuoteStyle, Range<usize>),
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans one sample line.
///
/// Returns `Ok(None)` for blank lines, comments and anything that does not
/// start with `NAME=` (whitespace is allowed around the name and after `=`).
///
/// # Errors
///
/// Returns a [`LineError`] when a quoted value is never closed, or when the
/// closing quote is followed by text that is not a `#` comment.
pub fn scan_line(line: &str) -> Result<Option<VariableSpec>, LineError> {
    let trimmed_end = line.trim_end().len();

    let mut state = State::BeforeName;
    let mut name = 0..0;
    let mut capture = Capture::Nothing;
    let mut value_start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in line.char_indices() {
        state = match state {
            State::BeforeName if c.is_whitespace() => State::BeforeName,
            State::BeforeName if is_word(c) => {
                name.start = i;
                State::InName
            }
            State::BeforeName => return Ok(None),

            State::InName if is_word(c) => State::InName,
            State::InName => {
                name.end = i;
                match c {
                    '=' => State::BeforeValue,
                    c if c.is_whitespace() => State::AfterName,
                    _ => return Ok(None),
                }
            }

            State::AfterName if c.is_whitespace() => State::AfterName,
            State::AfterName if c == '=' => State::BeforeValue,
            State::AfterName => return Ok(None),

            State::BeforeValue if c.is_whitespace() => State::BeforeValue,
            State::BeforeValue => {
                if let Some(style) = QuoteStyle::from_char(c) {
                    value_start = i;
                    State::InQuotedValue(style)
                } else if c == '#' {
                    State::Done
                } else {
                    capture = Capture::Bare(i..i + c.len_utf8());
                    State::InBareValue
                }
            }

            State::InQuotedValue(style) if c == style.as_char() && prev != Some('\\') => {
                capture = Capture::Quoted(style, value_start + 1..i);
                State::AfterQuotedValue(style)
            }
            State::InQuotedValue(style) => State::InQuotedValue(style),

            State::AfterQuotedValue(style) if c.is_whitespace() => State::AfterQuotedValue(style),
            State::AfterQuotedValue(_) if c == '#' => State::Done,
            State::AfterQuotedValue(style) => {
                return Err(LineError {
                    kind: LineErrorKind::TrailingContent(style),
                    span: i..trimmed_end.max(i + c.len_utf8()),
                });
            }

            State::InBareValue if c == '#' && prev.is_some_and(char::is_whitespace) => State::Done,
            State::InBareValue => {
                if !c.is_whitespace()
                    && let Capture::Bare(range) = &mut capture
                {
                    range.end = i + c.len_utf8();
                }
                State::InBareValue
            }

            State::Done => State::Done,
        };

        if state == State::Done {
            break;
        }
        prev = Some(c);
    }

    let default = match state {
        State::BeforeName | State::InName | State::AfterName => return Ok(None),
        State::InQuotedValue(style) => {
            return Err(LineError {
                kind: LineErrorKind::UnterminatedQuote(style),
                span: value_start..trimmed_end.max(value_start + 1),
            });
        }
        State::BeforeValue
        | State::AfterQuotedValue(_)
        | State::InBareValue
        | State::Done => match capture {
            Capture::Nothing => DefaultValue::Absent,
            Capture::Quoted(style, range) if range.is_empty() => DefaultValue::Empty(style),
            Capture::Quoted(style, range) => DefaultValue::Literal {
                text: line[range].to_owned(),
                quote: Some(style),
            },
            Capture::Bare(range) => DefaultValue::Literal {
                text: line[range].to_owned(),
                quote: None,
            },
        },
    };

    Ok(Some(VariableSpec::new(&line[name], default)))
}

// ============================================================================
// Unit Tests
// ============================================================================
