// Command handlers module
pub mod check;
pub mod config;
pub mod version;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::ArgMatches;

use crate::core::health::Severity;

// Re-exports for cleaner imports
pub use check::execute as check;
pub use version::execute as version;

/// Exit code for usage, configuration and collection failures
pub const EXIT_ERROR: i32 = 3;

/// Dispatch parsed arguments. Commands other than `check` report [`Severity::Ok`].
pub fn run(matches: &ArgMatches) -> Result<Severity> {
    if matches.get_flag("version") {
        version()?;
        return Ok(Severity::Ok);
    }

    match matches.subcommand() {
        Some(("version", _)) => {
            version()?;
            Ok(Severity::Ok)
        }
        Some(("config", sub_matches)) => {
            config::handle(sub_matches)?;
            Ok(Severity::Ok)
        }
        Some(("check", sub_matches)) => check(sub_matches),
        _ => check(matches),
    }
}

/// Process exit code for the result of [`run`]
pub fn exit_code(result: &Result<Severity>) -> i32 {
    match result {
        Ok(severity) => severity.exit_code(),
        Err(_) => EXIT_ERROR,
    }
}

/// Process exit code when the command line itself could not be parsed.
///
/// `--help` is not a failure; every usage error is a configuration error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_ERROR,
    }
}
