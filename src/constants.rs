/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Glob pattern selecting the files the migration rewrites
///
/// Only files whose name matches this pattern are ever opened.
pub const FILE_PATTERN: &str = "*.java";

/// Help text for the directory positional argument
pub const DIRECTORY_HELP: &str = "Root directory to apply the renaming migration to";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write a plain-text copy of the output to this file";
