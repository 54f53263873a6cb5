mod args;
mod error;
mod logging;
mod report;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use envsample::{Converter, DictVarName};

use crate::args::{Cli, Destination, Invocation};
use crate::error::CliError;
use crate::report::ModuleResult;

fn main() -> ExitCode {
    // A local .env may carry ENVSAMPLE_* settings; its absence is not an error.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.exit()
        }
        Err(err) => {
            ModuleResult::failed(CliError::from(err).report_message()).print();
            return ExitCode::FAILURE;
        }
    };
    logging::init(&cli.log_level);

    match run(&cli) {
        Ok(Some(path)) => {
            ModuleResult::changed(&path).print();
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            let msg = err.report_message();
            tracing::error!("{msg}");
            tracing::debug!("{:?}", miette::Report::new(err));
            ModuleResult::failed(msg).print();
            ExitCode::FAILURE
        }
    }
}

/// Converts the sample and writes the template. Returns the written path,
/// or `None` when the template went to stdout.
fn run(cli: &Cli) -> Result<Option<PathBuf>, CliError> {
    let Invocation {
        sample_path,
        dict_var,
        destination,
    } = cli.resolve()?;

    let converter = Converter::new().with_dict(DictVarName::new(dict_var)?);
    tracing::info!(sample = %sample_path.display(), dict = %converter.dict(), "converting");

    let template = converter.convert_file(&sample_path)?;

    match destination {
        Destination::Stdout => {
            print!("{template}");
            Ok(None)
        }
        Destination::Path(path) => {
            fs::write(&path, &template).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Some(path))
        }
        Destination::TempFile => write_temp(&template).map(Some),
    }
}

/// Writes the template to a new temporary file that outlives the process.
fn write_temp(template: &str) -> Result<PathBuf, CliError> {
    let mut file = tempfile::Builder::new()
        .prefix("envsample-")
        .suffix(".j2")
        .tempfile()
        .map_err(|source| CliError::Write {
            path: std::env::temp_dir().display().to_string(),
            source,
        })?;

    file.write_all(template.as_bytes())
        .map_err(|source| CliError::Write {
            path: file.path().display().to_string(),
            source,
        })?;

    let path = file
        .into_temp_path()
        .keep()
        .map_err(|err| CliError::Write {
            path: err.path.display().to_string(),
            source: err.error,
        })?;

    tracing::debug!(path = %path.display(), "template written");
    Ok(path)
}
