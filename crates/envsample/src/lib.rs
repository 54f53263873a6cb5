//! # envsample
//!
//! Turns a dotenv *sample* file (the `.env.example` committed next to an
//! application) into a Jinja2 template that deployment tooling renders
//! against a dictionary of real values.
//!
//! ## Sample Format
//!
//! | Sample line | Template line |
//! |-------------|---------------|
//! | `VAR=` | `VAR={{ env.VAR \| string \| quote }}` |
//! | `VAR=abc` | `VAR={{ env.VAR \| default('abc') \| string \| quote }}` |
//! | `VAR=""` | `VAR={{ env.VAR \| default("") \| string \| quote }}` |
//! | `VAR=abc#def` | default `'abc#def'` (no whitespace before `#`) |
//! | `VAR=abc #def` | default `'abc'` (`#def` is a comment) |
//! | `VAR="abc #def"` | default `"abc #def"` |
//! | `# comment`, blank | nothing |
//!
//! Required variables make rendering fail when no value is supplied; the
//! error comes from the template engine, not from this crate. Bare defaults
//! are shell-quoted so they survive the `quote` filter round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), envsample::Error> {
//!     let template = envsample::convert_file(".env.sample", "env")?;
//!     std::fs::write(".env.j2", template).expect("write template");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `tracing` | Emit [`tracing`](https://docs.rs/tracing) events per line and per conversion | No |

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Re-export miette for rendering diagnostics.
pub use miette;

// ============================================================================
// Core Modules
// ============================================================================

mod error;
pub use error::{Error, Result};

pub mod scanner;
pub use scanner::{DefaultValue, LineError, LineErrorKind, QuoteStyle, VariableSpec, scan_line};

mod quote;
pub use quote::shell_quote;

pub mod template;
pub use template::{DictVarName, render_line};

mod converter;
pub use converter::{Converter, convert_file};
