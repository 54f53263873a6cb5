//! Jinja2 placeholder emission.
//!
//! Every recognized assignment becomes one line of the form
//!
//! ```text
//! NAME={{ env.NAME | string | quote }}
//! NAME={{ env.NAME | default('value') | string | quote }}
//! ```
//!
//! where `env` is the [`DictVarName`] the caller chose.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::scanner::VariableSpec;

/// Name of the dictionary the rendered template reads values from.
///
/// One or more segments of letters, digits and underscores separated by `.`,
/// e.g. `env`, `cfg` or `hostvars.app`. Defaults to `env`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DictVarName(String);

impl DictVarName {
    /// Validates a dictionary variable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDictVarName`] if `name` is empty or contains
    /// anything other than `.`-separated word segments.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        let valid = name
            .split('.')
            .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'));

        if valid {
            Ok(Self(name))
        } else {
            Err(Error::invalid_dict_var(name))
        }
    }

    /// Returns the name as written in placeholders.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DictVarName {
    fn default() -> Self {
        Self("env".to_owned())
    }
}

impl FromStr for DictVarName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DictVarName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders one template line for `spec`, without a line terminator.
#[must_use]
pub fn render_line(spec: &VariableSpec, dict: &DictVarName) -> String {
    let name = &spec.name;
    match spec.default.template_literal() {
        None => format!("{name}={{{{ {dict}.{name} | string | quote }}}}"),
        Some(default) => {
            format!("{name}={{{{ {dict}.{name} | default({default}) | string | quote }}}}")
        }
    }
}
