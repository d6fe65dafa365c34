mod execute;

use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::TesterArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use execute::execute_run;

pub(crate) fn run() -> AppResult<()> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    // Loaded before parsing so NUM_THREADS and friends from .env feed clap's
    // env fallbacks.
    let dotenv_result = if skip_dotenv(&raw_args) {
        None
    } else {
        Some(dotenvy::dotenv())
    };

    let (mut args, matches) = parse_args(raw_args)?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose);
    match dotenv_result {
        Some(Ok(path)) => debug!("Loaded environment from {}", path.display()),
        Some(Err(err)) if err.not_found() => debug!("No .env file found"),
        Some(Err(err)) => debug!("Ignoring unreadable .env file: {}", err),
        None => debug!(".env loading disabled"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(execute_run(args))
}

fn parse_args(raw_args: Vec<OsString>) -> AppResult<(TesterArgs, ArgMatches)> {
    let matches = TesterArgs::command().get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn skip_dotenv(raw_args: &[OsString]) -> bool {
    raw_args.iter().any(|arg| arg == "--no-dotenv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dotenv_flag_is_detected_before_parsing() -> Result<(), String> {
        let with_flag: Vec<OsString> = ["volley", "-w", "2", "--no-dotenv"]
            .iter()
            .map(OsString::from)
            .collect();
        let without_flag: Vec<OsString> = ["volley", "-w", "2"]
            .iter()
            .map(OsString::from)
            .collect();
        if !skip_dotenv(&with_flag) {
            return Err("Expected --no-dotenv to be detected".to_owned());
        }
        if skip_dotenv(&without_flag) {
            return Err("Unexpected --no-dotenv detection".to_owned());
        }
        Ok(())
    }
}
