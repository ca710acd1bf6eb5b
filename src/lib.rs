//! Recursive literal search-and-replace for source tree migrations
//!
//! Walks a directory tree, finds files matching a fixed glob pattern and
//! rewrites them in place by applying an ordered list of literal renaming
//! rules. Ships with the rule table for the EJML 3.1 API renaming migration.

pub use cli::*;
pub use errors::*;
pub use rewriter::{RuleOutcome, RunReport, apply_rules, run};
pub use rules::{RenameRule, RuleSet, ejml_rule_set, fixed_matrix_rules, verify_rule_set};
pub use scanner::scan_tree;

mod cli;
pub mod constants;
mod errors;
pub mod logging;
mod rewriter;
mod rules;
mod scanner;

pub mod prelude {
    pub use crate::constants::FILE_PATTERN;
    pub use crate::errors::{
        Error, Result, directory_not_found_error, file_operation_error, generic_error,
        glob_pattern_error, rule_collision_error, traversal_error,
    };
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::rewriter::{RunReport, run};
    pub use crate::rules::{RenameRule, RuleSet, ejml_rule_set, verify_rule_set};
}
