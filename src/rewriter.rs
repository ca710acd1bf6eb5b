//! The rewrite engine
//!
//! Applies an ordered rule set to every matching file under a root
//! directory, rewriting files in place. Each file is read once, the full
//! rule set is applied in memory, and the file is written back only if the
//! content changed. Later rules still observe earlier rules' output, so the
//! result is identical to running one full pass per rule, without walking
//! the tree 49 times.

use std::fs;
use std::path::Path;

use log::{debug, info, trace};

use crate::constants::FILE_PATTERN;
use crate::errors::{Result, file_operation_error};
use crate::rules::{RuleSet, verify_rule_set};
use crate::scanner::scan_tree;

/// Per-rule counters for one migration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// The literal text the rule searched for
    pub find: String,
    /// The literal text the rule substituted
    pub replace: String,
    /// Number of files this rule actually modified
    pub changed: usize,
    /// Number of files matching the glob, regardless of modification
    pub examined: usize,
}

/// Summary of a whole migration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// One outcome per rule, in rule order
    pub outcomes: Vec<RuleOutcome>,
    /// Number of files rewritten on disk
    pub files_rewritten: usize,
}

impl RunReport {
    /// Emit one progress line per rule that modified at least one file
    ///
    /// Rules that matched nothing stay silent, so an untouched tree produces
    /// no per-rule output at all.
    pub fn log_summary(&self) {
        for outcome in &self.outcomes {
            if outcome.changed > 0 {
                info!(
                    "changed {:4} examined {:4} {} -> {}",
                    outcome.changed, outcome.examined, outcome.find, outcome.replace
                );
            }
        }
    }
}

/// Apply every rule in order to the given text
///
/// Substitution is plain non-overlapping leftmost-first literal replacement.
/// Returns the rewritten text together with one flag per rule recording
/// whether that rule changed anything.
pub fn apply_rules(content: &str, rules: &RuleSet) -> (String, Vec<bool>) {
    let mut text = content.to_string();
    let mut rule_changed = Vec::with_capacity(rules.len());

    for rule in rules {
        let replaced = text.replace(&rule.find, &rule.replace);
        rule_changed.push(replaced != text);
        text = replaced;
    }

    (text, rule_changed)
}

/// Run the migration over every matching file under `root`
///
/// Files are rewritten in place with no backup; the first I/O error aborts
/// the run, leaving already-rewritten files as they are.
///
/// # Errors
/// Returns an error if the rule set fails the pre-flight collision check,
/// if `root` is not an existing directory, or if any matching file cannot
/// be read or written.
pub fn run(root: &Path, rules: &RuleSet) -> Result<RunReport> {
    verify_rule_set(rules)?;

    let files = scan_tree(root, FILE_PATTERN)?;
    let examined = files.len();

    let mut changed_counts = vec![0usize; rules.len()];
    let mut files_rewritten = 0;

    for path in &files {
        trace!("Examining {}", path.display());

        let original = fs::read_to_string(path)
            .map_err(|e| file_operation_error(e, path.clone(), "read"))?;

        let (rewritten, rule_changed) = apply_rules(&original, rules);

        for (count, changed) in changed_counts.iter_mut().zip(&rule_changed) {
            if *changed {
                *count += 1;
            }
        }

        if rewritten != original {
            fs::write(path, &rewritten)
                .map_err(|e| file_operation_error(e, path.clone(), "write"))?;
            files_rewritten += 1;
            debug!("Rewrote {}", path.display());
        }
    }

    let outcomes = rules
        .iter()
        .zip(changed_counts)
        .map(|(rule, changed)| RuleOutcome {
            find: rule.find.clone(),
            replace: rule.replace.clone(),
            changed,
            examined,
        })
        .collect();

    Ok(RunReport {
        outcomes,
        files_rewritten,
    })
}
