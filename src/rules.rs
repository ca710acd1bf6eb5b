//! Renaming rule definitions
//!
//! This module holds the rule table for the EJML 3.1 API renaming migration
//! and is deliberately independent of the rewrite engine: what to rename and
//! how to rewrite files are separate, separately testable concerns.

use crate::errors::{Result, rule_collision_error};

/// A single literal renaming rule
///
/// Every occurrence of `find` in a matching file is replaced with `replace`.
/// The text is treated verbatim; there is no regex syntax and no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    /// The literal text to search for
    pub find: String,
    /// The literal text to substitute
    pub replace: String,
}

impl RenameRule {
    pub fn new(find: &str, replace: &str) -> RenameRule {
        RenameRule {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

/// An ordered list of renaming rules
///
/// Order matters: later rules are applied to text already rewritten by
/// earlier rules.
pub type RuleSet = Vec<RenameRule>;

/// Bare class renames, applied before everything else
const CLASS_RENAMES: [(&str, &str); 17] = [
    ("DenseMatrix64F", "RowMatrix_F64"),
    ("DenseMatrix32F", "RowMatrix_F32"),
    ("BlockMatrix64F", "BlockMatrix_F64"),
    ("BlockMatrix32F", "BlockMatrix_F32"),
    ("ComplexMatrix64F", "Matrix_C64"),
    ("ComplexMatrix32F", "Matrix_C32"),
    ("CDenseMatrix64F", "RowMatrix_C64"),
    ("CDenseMatrix32F", "RowMatrix_C32"),
    ("Complex64F", "Complex_F64"),
    ("Complex32F", "Complex_F32"),
    ("ComplexPolar64F", "ComplexPolar_F64"),
    ("ComplexPolar32F", "ComplexPolar_F32"),
    ("ComplexMath64F", "ComplexMath_F64"),
    ("ComplexMath32F", "ComplexMath_F32"),
    ("DenseMatrixBool", "RowMatrix_B"),
    ("EigenPair64F", "EigenPair_F64"),
    ("EigenPair32F", "EigenPair_F32"),
];

/// Short type suffix renames, applied after the class renames so that the
/// longer class names are never partially rewritten by these
const SUFFIX_RENAMES: [(&str, &str); 4] = [
    ("_D64", "_R64"),
    ("_D32", "_R32"),
    ("_CD64", "_CR64"),
    ("_CD32", "_CR32"),
];

/// Static operation classes whose qualified call sites gain a matrix-type
/// suffix in the new naming convention
const OPS_CLASSES: [&str; 8] = [
    "CommonOps",
    "CovarianceOps",
    "EigenOps",
    "MatrixFeatures",
    "NormOps",
    "RandomMatrices",
    "SingularOps",
    "SpecializedOps",
];

/// Expand the fixed-size matrix family into concrete rules
///
/// For every size in the range this generates the linear (`FixedMatrixN`) and
/// square (`FixedMatrixNxN`) name variants, each in both numeric precisions,
/// moving the precision tag from `_64F`/`_32F` style to `_F64`/`_F32` style.
pub fn fixed_matrix_rules(sizes: std::ops::RangeInclusive<u32>) -> RuleSet {
    let mut rules = RuleSet::new();

    for n in sizes {
        let linear = format!("FixedMatrix{n}");
        let square = format!("FixedMatrix{n}x{n}");
        rules.push(RenameRule::new(
            &format!("{linear}_64F"),
            &format!("{linear}_F64"),
        ));
        rules.push(RenameRule::new(
            &format!("{square}_64F"),
            &format!("{square}_F64"),
        ));
        rules.push(RenameRule::new(
            &format!("{linear}_32F"),
            &format!("{linear}_F32"),
        ));
        rules.push(RenameRule::new(
            &format!("{square}_32F"),
            &format!("{square}_F32"),
        ));
    }

    rules
}

/// Build the full ordered rule set for the EJML 3.1 renaming migration
///
/// The order is part of the migration's contract: class renames first, then
/// the parametrized fixed-size family, then short suffixes, then qualified
/// static-call renames.
pub fn ejml_rule_set() -> RuleSet {
    let mut rules: RuleSet = CLASS_RENAMES
        .iter()
        .map(|(find, replace)| RenameRule::new(find, replace))
        .collect();

    rules.extend(fixed_matrix_rules(2..=6));

    rules.extend(
        SUFFIX_RENAMES
            .iter()
            .map(|(find, replace)| RenameRule::new(find, replace)),
    );

    rules.extend(
        OPS_CLASSES
            .iter()
            .map(|class| RenameRule::new(&format!("{class}."), &format!("{class}_R64"))),
    );

    rules
}

/// Verify that sequential application of the rule set is collision-free
///
/// Rules run in order against a shared namespace, so text emitted by one
/// rule's replacement could be spuriously matched by that rule or by any
/// later rule. That would mangle already-migrated names and break
/// idempotence, with no way to tell from the output. Fail fast instead.
pub fn verify_rule_set(rules: &RuleSet) -> Result<()> {
    for (i, producer) in rules.iter().enumerate() {
        for consumer in &rules[i..] {
            if producer.replace.contains(&consumer.find) {
                return Err(rule_collision_error(&producer.replace, &consumer.find));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_size_and_order() {
        let rules = ejml_rule_set();

        // 17 class renames + 20 fixed-matrix rules + 4 suffixes + 8 ops classes
        assert_eq!(rules.len(), 49);

        // Spot-check the ordering contract
        assert_eq!(rules[0], RenameRule::new("DenseMatrix64F", "RowMatrix_F64"));
        assert_eq!(rules[17], RenameRule::new("FixedMatrix2_64F", "FixedMatrix2_F64"));
        assert_eq!(rules[37], RenameRule::new("_D64", "_R64"));
        assert_eq!(rules[41], RenameRule::new("CommonOps.", "CommonOps_R64"));
        assert_eq!(
            rules[48],
            RenameRule::new("SpecializedOps.", "SpecializedOps_R64")
        );
    }

    #[test]
    fn test_fixed_matrix_expansion() {
        let rules = fixed_matrix_rules(3..=3);

        assert_eq!(
            rules,
            vec![
                RenameRule::new("FixedMatrix3_64F", "FixedMatrix3_F64"),
                RenameRule::new("FixedMatrix3x3_64F", "FixedMatrix3x3_F64"),
                RenameRule::new("FixedMatrix3_32F", "FixedMatrix3_F32"),
                RenameRule::new("FixedMatrix3x3_32F", "FixedMatrix3x3_F32"),
            ]
        );
    }

    #[test]
    fn test_fixed_matrix_empty_range() {
        assert!(fixed_matrix_rules(4..=3).is_empty());
    }

    #[test]
    fn test_ejml_rule_set_is_collision_free() {
        let rules = ejml_rule_set();
        assert!(verify_rule_set(&rules).is_ok());
    }

    #[test]
    fn test_verify_detects_later_rule_collision() {
        // The first rule emits text the second rule would match
        let rules = vec![
            RenameRule::new("OldName", "Name_D64"),
            RenameRule::new("_D64", "_R64"),
        ];

        let result = verify_rule_set(&rules);
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Name_D64"));
        assert!(message.contains("_D64"));
    }

    #[test]
    fn test_verify_detects_self_collision() {
        // A rule whose output re-matches its own input never reaches a
        // fixed point
        let rules = vec![RenameRule::new("Ops", "OpsExt")];

        assert!(verify_rule_set(&rules).is_err());
    }

    #[test]
    fn test_verify_allows_earlier_rule_reuse() {
        // An earlier rule matching a later rule's output is harmless:
        // the earlier rule has already finished by then
        let rules = vec![
            RenameRule::new("_R64", "_Row64"),
            RenameRule::new("_D64", "_R64"),
        ];

        assert!(verify_rule_set(&rules).is_ok());
    }
}
