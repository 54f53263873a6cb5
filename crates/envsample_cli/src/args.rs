//! Command-line and args-file handling.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::CliError;

/// Turn a dotenv sample into a Jinja2 template.
#[derive(Debug, Parser)]
#[command(name = "envsample", version, about)]
pub struct Cli {
    /// Path to the dotenv sample file
    #[arg(long, env = "ENVSAMPLE_SAMPLE_PATH")]
    pub dotenv_sample_path: Option<PathBuf>,

    /// Dictionary variable that carries values when the template is rendered [default: env]
    #[arg(long, env = "ENVSAMPLE_DICT_VARNAME")]
    pub env_dict_varname: Option<String>,

    /// JSON file with `dotenv_sample_path` and `env_dict_varname` keys
    #[arg(long)]
    pub args_file: Option<PathBuf>,

    /// Write the template here instead of a new temporary file
    #[arg(long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the template instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Log verbosity on stderr (error, warn, info, debug, trace, off)
    #[arg(long, env = "ENVSAMPLE_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Arguments read from `--args-file`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleArgs {
    /// Path to the dotenv sample file.
    pub dotenv_sample_path: Option<PathBuf>,

    /// Dictionary variable name.
    #[serde(default)]
    pub env_dict_varname: Option<String>,
}

impl ModuleArgs {
    /// Reads and parses an args file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ArgsFileRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| CliError::ArgsFileParse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Where the generated template goes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Destination {
    /// A fresh, persisted temporary file.
    TempFile,

    /// A caller-chosen path.
    Path(PathBuf),

    /// Standard output.
    Stdout,
}

/// Fully resolved invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    /// Sample to convert.
    pub sample_path: PathBuf,

    /// Dictionary variable name, not yet validated.
    pub dict_var: String,

    /// Output destination.
    pub destination: Destination,
}

impl Cli {
    /// Merges flags (and their env vars) over the args file.
    pub fn resolve(&self) -> Result<Invocation, CliError> {
        let file_args = match &self.args_file {
            Some(path) => ModuleArgs::from_file(path)?,
            None => ModuleArgs::default(),
        };

        let sample_path = self
            .dotenv_sample_path
            .clone()
            .or(file_args.dotenv_sample_path)
            .ok_or(CliError::MissingSamplePath)?;

        let dict_var = self
            .env_dict_varname
            .clone()
            .or(file_args.env_dict_varname)
            .unwrap_or_else(|| "env".to_owned());

        let destination = if self.stdout {
            Destination::Stdout
        } else if let Some(path) = &self.output {
            Destination::Path(path.clone())
        } else {
            Destination::TempFile
        };

        Ok(Invocation {
            sample_path,
            dict_var,
            destination,
        })
    }
}
