//! JSON result documents printed on stdout.
//!
//! ```text
//! {"changed":true,"dotenv_template_path":"/tmp/envsample-1a2b3c.j2"}
//! {"failed":true,"msg":"Error accessing file: failed to read dotenv sample x.env: ..."}
//! ```

use std::path::Path;

use serde::Serialize;

/// Outcome of one invocation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ModuleResult {
    /// The template was written.
    Changed {
        /// Always `true`.
        changed: bool,

        /// Where the template was written.
        dotenv_template_path: String,
    },

    /// Nothing was written.
    Failed {
        /// Always `true`.
        failed: bool,

        /// Category-prefixed error message.
        msg: String,
    },
}

impl ModuleResult {
    /// Success document for `path`.
    pub fn changed(path: &Path) -> Self {
        Self::Changed {
            changed: true,
            dotenv_template_path: path.display().to_string(),
        }
    }

    /// Failure document.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed {
            failed: true,
            msg: msg.into(),
        }
    }

    /// Prints the document as one line of JSON on stdout.
    pub fn print(&self) {
        match serde_json::to_string(self) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize result: {err}"),
        }
    }
}
