//! CLI error types.

use miette::Diagnostic;

/// Errors raised by the command-line front-end.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum CliError {
    /// Command-line arguments were rejected by the parser.
    #[error("{message}")]
    #[diagnostic(
        code(envsample::cli::usage),
        help("run `envsample --help` for the accepted arguments")
    )]
    Usage {
        /// First line of the parser's message.
        message: String,
    },

    /// No sample path on the command line, in the environment, or in the args file.
    #[error("missing required argument: dotenv_sample_path")]
    #[diagnostic(
        code(envsample::cli::missing_sample_path),
        help("pass --dotenv-sample-path, set ENVSAMPLE_SAMPLE_PATH, or provide it in --args-file")
    )]
    MissingSamplePath,

    /// The args file could not be read.
    #[error("failed to read args file {path}")]
    #[diagnostic(code(envsample::cli::args_file_read))]
    ArgsFileRead {
        /// Path to the args file.
        path: String,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The args file is not the expected JSON object.
    #[error("invalid args file {path}: {source}")]
    #[diagnostic(
        code(envsample::cli::args_file_parse),
        help("expected {{\"dotenv_sample_path\": \"...\", \"env_dict_varname\": \"...\"}}")
    )]
    ArgsFileParse {
        /// Path to the args file.
        path: String,

        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Conversion failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] envsample::Error),

    /// The template could not be written.
    #[error("failed to write template to {path}")]
    #[diagnostic(
        code(envsample::cli::write_error),
        help("check that the destination directory exists and is writable")
    )]
    Write {
        /// Destination path.
        path: String,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::Usage {
            message: first.trim_start_matches("error: ").to_owned(),
        }
    }
}

impl CliError {
    /// Message for the JSON failure document, prefixed by category.
    pub fn report_message(&self) -> String {
        match self {
            Self::ArgsFileRead { source, .. } | Self::Write { source, .. } => {
                format!("Error accessing file: {self}: {source}")
            }
            Self::Convert(envsample::Error::UnreadableInput { source, .. }) => {
                format!("Error accessing file: {self}: {source}")
            }
            Self::Convert(envsample::Error::MalformedLine { .. }) => {
                format!("Unexpected condition: {self}")
            }
            Self::Usage { .. }
            | Self::MissingSamplePath
            | Self::ArgsFileParse { .. }
            | Self::Convert(envsample::Error::InvalidDictVarName { .. }) => {
                format!("Invalid argument: {self}")
            }
        }
    }
}
