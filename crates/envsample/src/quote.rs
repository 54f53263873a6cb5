//! POSIX shell quoting for bare default values.

use std::borrow::Cow;

/// Returns `true` for characters that never need quoting in `sh`.
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '_' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quotes `s` so that a POSIX shell reads it back as a single word.
///
/// Strings made only of `[A-Za-z0-9@%_+=:,./-]` are returned unchanged, the
/// empty string becomes `''`, and anything else is wrapped in single quotes
/// with every embedded `'` written as `'"'"'`.
///
/// ```
/// use envsample::shell_quote;
///
/// assert_eq!(shell_quote("abc"), "abc");
/// assert_eq!(shell_quote(""), "''");
/// assert_eq!(shell_quote("a b"), "'a b'");
/// assert_eq!(shell_quote("it's"), r#"'it'"'"'s'"#);
/// ```
#[must_use]
pub fn shell_quote(s: &str) -> Cow<'_, str> {
    if s.is_empty() {
        return Cow::Borrowed("''");
    }

    if s.chars().all(is_shell_safe) {
        return Cow::Borrowed(s);
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\'' {
            quoted.push_str(r#"'"'"'"#);
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');

    Cow::Owned(quoted)
}
