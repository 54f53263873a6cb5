//! Whole-sample conversion.
//!
//! [`Converter`] folds [`scan_line`] and [`render_line`] over every line of a
//! sample. Output keeps input order, drops comments and blank lines, and ends
//! every emitted line with `\n`. The first malformed line aborts the run.
//!
//! ```rust
//! use envsample::Converter;
//!
//! let sample = "\
//! # database
//! DB_URL=
//! DB_POOL=10 # connections
//! ";
//!
//! let template = Converter::new().dict_var("cfg")?.convert_str(".env.sample", sample)?;
//! assert_eq!(
//!     template,
//!     "DB_URL={{ cfg.DB_URL | string | quote }}\n\
//!      DB_POOL={{ cfg.DB_POOL | default('10') | string | quote }}\n"
//! );
//! # Ok::<(), envsample::Error>(())
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scanner::{VariableSpec, scan_line};
use crate::template::{DictVarName, render_line};

/// Converts dotenv samples into templates.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    dict: DictVarName,
}

impl Converter {
    /// Creates a converter that emits `env.NAME` placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dictionary variable name used in placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDictVarName`] if `name` is not a dotted identifier.
    pub fn dict_var(mut self, name: impl Into<String>) -> Result<Self> {
        self.dict = DictVarName::new(name)?;
        Ok(self)
    }

    /// Uses an already validated dictionary variable name.
    #[must_use]
    pub fn with_dict(mut self, dict: DictVarName) -> Self {
        self.dict = dict;
        self
    }

    /// Returns the dictionary variable name in use.
    #[must_use]
    pub const fn dict(&self) -> &DictVarName {
        &self.dict
    }

    /// Scans every line of `text` and returns the recognized assignments.
    ///
    /// `sample` names the input in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] for the first line that cannot be parsed.
    pub fn scan_str(&self, sample: &str, text: &str) -> Result<Vec<VariableSpec>> {
        let mut specs = Vec::new();

        for (idx, (line_offset, line)) in lines_with_offsets(text).enumerate() {
            match scan_line(line) {
                Ok(Some(spec)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        line = idx + 1,
                        name = %spec.name,
                        required = spec.default.is_required(),
                        "recognized assignment"
                    );
                    specs.push(spec);
                }
                Ok(None) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(line = idx + 1, "skipped line");
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(line = idx + 1, reason = %err, "malformed line in {sample}");
                    return Err(Error::malformed(sample, text, idx + 1, line_offset, line, &err));
                }
            }
        }

        Ok(specs)
    }

    /// Converts the sample `text` into a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] for the first line that cannot be parsed.
    pub fn convert_str(&self, sample: &str, text: &str) -> Result<String> {
        let specs = self.scan_str(sample, text)?;

        let mut template = String::with_capacity(text.len() * 2);
        for spec in &specs {
            template.push_str(&render_line(spec, &self.dict));
            template.push('\n');
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            sample,
            dict = %self.dict,
            variables = specs.len(),
            "converted dotenv sample"
        );

        Ok(template)
    }

    /// Reads the sample at `path` and converts it into a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableInput`] if the file cannot be read as UTF-8,
    /// and [`Error::MalformedLine`] for the first line that cannot be parsed.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::unreadable(path, source))?;
        self.convert_str(&path.display().to_string(), &text)
    }
}

/// Splits `text` on `\n`, `\r\n` or a lone `\r`, yielding each line without
/// its terminator together with its byte offset in `text`.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let end = pos;
            match bytes[pos] {
                b'\n' => pos += 1,
                b'\r' if bytes.get(pos + 1) == Some(&b'\n') => pos += 2,
                b'\r' => pos += 1,
                _ => {
                    pos += 1;
                    continue;
                }
            }
            let line = (start, &text[start..end]);
            start = pos;
            return Some(line);
        }

        (start < bytes.len()).then(|| {
            let line = (start, &text[start..]);
            start = bytes.len();
            line
        })
    })
}

/// Converts the sample at `path` using `dict_var` as the dictionary name.
///
/// # Errors
///
/// See [`Converter::dict_var`] and [`Converter::convert_file`].
pub fn convert_file(path: impl AsRef<Path>, dict_var: &str) -> Result<String> {
    Converter::new().dict_var(dict_var)?.convert_file(path)
}
