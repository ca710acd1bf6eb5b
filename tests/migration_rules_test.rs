use bulk_rename::{apply_rules, ejml_rule_set, verify_rule_set};

#[cfg(test)]
mod tests {
    use super::*;

    fn migrate(text: &str) -> String {
        apply_rules(text, &ejml_rule_set()).0
    }

    #[test]
    fn test_class_renames() {
        assert_eq!(migrate("DenseMatrix64F"), "RowMatrix_F64");
        assert_eq!(migrate("DenseMatrix32F"), "RowMatrix_F32");
        assert_eq!(migrate("ComplexMatrix32F"), "Matrix_C32");
        assert_eq!(migrate("DenseMatrixBool"), "RowMatrix_B");
        assert_eq!(migrate("ComplexPolar64F"), "ComplexPolar_F64");
    }

    #[test]
    fn test_fixed_matrix_family_renames() {
        // Linear and square variants across the whole 2..=6 range
        assert_eq!(migrate("FixedMatrix2_64F"), "FixedMatrix2_F64");
        assert_eq!(migrate("FixedMatrix4x4_64F"), "FixedMatrix4x4_F64");
        assert_eq!(migrate("FixedMatrix5_32F"), "FixedMatrix5_F32");
        assert_eq!(migrate("FixedMatrix6x6_32F"), "FixedMatrix6x6_F32");

        // Size 7 was never part of the migration
        assert_eq!(migrate("FixedMatrix7x7_64F"), "FixedMatrix7x7_64F");
    }

    #[test]
    fn test_suffix_renames() {
        assert_eq!(migrate("LinearSolver_D64"), "LinearSolver_R64");
        assert_eq!(migrate("LinearSolver_D32"), "LinearSolver_R32");
        assert_eq!(migrate("Decomposition_CD64"), "Decomposition_CR64");
        assert_eq!(migrate("Decomposition_CD32"), "Decomposition_CR32");
    }

    #[test]
    fn test_static_call_renames() {
        // The rule table is literal text: the find string includes the
        // qualifying dot and the replacement does not restore it
        assert_eq!(migrate("CommonOps.mult(a, b, c);"), "CommonOps_R64mult(a, b, c);");
        assert_eq!(migrate("RandomMatrices.createRandom"), "RandomMatrices_R64createRandom");
    }

    #[test]
    fn test_embedded_find_text_is_consumed_first() {
        // The DenseMatrix64F rule runs before the CDenseMatrix64F rule and
        // consumes the embedded occurrence, leaving the leading C behind.
        // The rule order is the migration's contract, quirks included.
        let migrated = migrate("CDenseMatrix64F m;");
        assert_eq!(migrated, "CRowMatrix_F64 m;");
    }

    #[test]
    fn test_migration_is_idempotent_on_text() {
        let source = "DenseMatrix64F a; FixedMatrix2x2_32F b; Norm_D64 n; EigenOps.compute();";

        let once = migrate(source);
        let twice = migrate(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_shipped_rule_set_passes_preflight() {
        assert!(verify_rule_set(&ejml_rule_set()).is_ok());
    }
}
