use std::path::PathBuf;

use clap::{Arg, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{DIRECTORY_HELP, LOG_FILE_HELP, VERBOSE_HELP};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `directory`: Root directory to apply the migration to (positional,
///   required)
/// - `verbose`: Increase verbosity level
/// - `log_file`: Duplicate output into a plain-text log file
///
/// A missing directory argument is an invocation error: clap prints the
/// usage message and exits with a nonzero status.
pub fn get_matches() -> ArgMatches {
    // define arg for the migration root directory
    let arg_directory = Arg::new("directory")
        .help(DIRECTORY_HELP)
        .value_name("DIRECTORY")
        .required(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_directory)
        .arg(arg_verbose)
        .arg(log_file)
        .get_matches()
}

/// Gets the target directory from the command-line arguments
///
/// # Errors
/// Returns an error if the directory argument is somehow absent, which clap
/// already prevents for a required positional.
pub fn get_target_directory(matches: &ArgMatches) -> Result<PathBuf> {
    matches
        .get_one::<String>("directory")
        .map(PathBuf::from)
        .ok_or_else(|| generic_error("Target directory argument not found"))
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to
/// a LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the optional log file path from the command-line arguments
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("log_file").map(PathBuf::from)
}
