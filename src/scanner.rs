//! Directory scanning functionality
//!
//! This module contains functions for walking the target tree and finding
//! the files the migration is allowed to touch.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::WalkDir;

use crate::errors::{Result, directory_not_found_error, glob_pattern_error, traversal_error};

/// Recursively scan a directory tree for files matching a glob pattern
///
/// The pattern is matched against file names only, not full paths, so
/// `*.java` selects Java sources at any depth. Files that do not match are
/// never opened. Entries are returned in traversal order.
///
/// # Errors
/// Returns an error if `root` is not an existing directory, if the pattern
/// is not a valid glob, or if any directory in the tree cannot be read.
pub fn scan_tree(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(directory_not_found_error(root.to_path_buf()));
    }

    debug!("Scanning {} for {pattern} files", root.display());

    let pattern = Pattern::new(pattern).map_err(|e| glob_pattern_error(e, pattern))?;

    let mut matches = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            traversal_error(e, path)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matched = entry
            .path()
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));

        if matched {
            matches.push(entry.into_path());
        }
    }

    debug!("Found {} matching files", matches.len());

    Ok(matches)
}
