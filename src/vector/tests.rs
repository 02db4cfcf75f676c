//! Vector Module Tests
//!
//! Validates the sparse-vector algebra and the term interner, including the
//! degenerate-case policy for cosine similarity.

#[cfg(test)]
mod tests {
    use crate::vector::sparse::SparseVector;
    use crate::vector::term::{TermDict, TermId};

    fn vec_of(pairs: &[(u32, f64)]) -> SparseVector {
        pairs
            .iter()
            .map(|(id, weight)| (TermId(*id), *weight))
            .collect()
    }

    // ============================================================
    // INTERNER TESTS
    // ============================================================

    #[test]
    fn test_intern_is_stable() {
        let dict = TermDict::new();
        let first = dict.intern("coronavirus");
        let second = dict.intern("coronavirus");
        assert_eq!(first, second);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_intern_distinct_terms_distinct_ids() {
        let dict = TermDict::new();
        let a = dict.intern("senate");
        let b = dict.intern("house");
        assert_ne!(a, b);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_get_does_not_allocate() {
        let dict = TermDict::new();
        assert!(dict.get("absent").is_none());
        assert!(dict.is_empty());

        dict.intern("present");
        assert!(dict.get("present").is_some());
    }

    // ============================================================
    // ADD / SUBTRACT
    // ============================================================

    #[test]
    fn test_add_key_union() {
        let v1 = vec_of(&[(0, 1.0), (1, 2.0)]);
        let v2 = vec_of(&[(1, 3.0), (2, 4.0)]);

        let sum = v1.add(&v2);
        assert_eq!(sum.get(TermId(0)), 1.0);
        assert_eq!(sum.get(TermId(1)), 5.0);
        assert_eq!(sum.get(TermId(2)), 4.0);
        assert_eq!(sum.len(), 3);
    }

    #[test]
    fn test_subtract_missing_keys_treated_as_zero() {
        let v1 = vec_of(&[(0, 1.0)]);
        let v2 = vec_of(&[(1, 2.5)]);

        let diff = v1.subtract(&v2);
        assert_eq!(diff.get(TermId(0)), 1.0);
        assert_eq!(diff.get(TermId(1)), -2.5);
    }

    #[test]
    fn test_subtract_inverts_add_on_key_union() {
        let v1 = vec_of(&[(0, 1.5), (2, -0.5)]);
        let v2 = vec_of(&[(0, 2.0), (1, 3.0)]);

        let roundtrip = v1.add(&v2).subtract(&v2);
        for id in 0..3 {
            assert!((roundtrip.get(TermId(id)) - v1.get(TermId(id))).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_weights_are_preserved() {
        let v1 = vec_of(&[(0, 0.2)]);
        let v2 = vec_of(&[(0, 1.0)]);

        let diff = v1.subtract(&v2);
        assert!((diff.get(TermId(0)) + 0.8).abs() < 1e-12);
    }

    // ============================================================
    // SCALE
    // ============================================================

    #[test]
    fn test_scale_by_one_is_identity() {
        let v = vec_of(&[(0, 1.0), (1, -2.0)]);
        assert_eq!(v.scale(1.0), v);
    }

    #[test]
    fn test_scale_by_zero_retains_keys() {
        let v = vec_of(&[(0, 1.0), (1, -2.0)]);

        let zeroed = v.scale(0.0);
        assert_eq!(zeroed.len(), 2);
        assert!(zeroed.contains(TermId(0)));
        assert!(zeroed.contains(TermId(1)));
        assert_eq!(zeroed.get(TermId(0)), 0.0);
        assert_eq!(zeroed.get(TermId(1)), 0.0);
    }

    #[test]
    fn test_scale_does_not_introduce_keys() {
        let v = vec_of(&[(3, 2.0)]);
        let scaled = v.scale(0.5);
        assert_eq!(scaled.len(), 1);
        assert_eq!(scaled.get(TermId(3)), 1.0);
    }

    // ============================================================
    // DOT / COSINE
    // ============================================================

    #[test]
    fn test_dot_symmetric_over_sparse_inputs() {
        let small = vec_of(&[(0, 2.0)]);
        let large = vec_of(&[(0, 3.0), (1, 5.0), (2, 7.0)]);

        assert_eq!(small.dot(&large), 6.0);
        assert_eq!(large.dot(&small), 6.0);
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vec_of(&[(0, 3.0), (1, 4.0)]);
        assert!((v.cosine_sim(&v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let v = vec_of(&[(0, 3.0)]);
        let zero = SparseVector::new();

        assert_eq!(v.cosine_sim(&zero), 0.0);
        assert_eq!(zero.cosine_sim(&v), 0.0);
        assert_eq!(zero.cosine_sim(&zero), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let v1 = vec_of(&[(0, 1.0)]);
        let v2 = vec_of(&[(1, 1.0)]);
        assert_eq!(v1.cosine_sim(&v2), 0.0);
    }

    #[test]
    fn test_cosine_known_value() {
        // {1, 1} against {1, 0}: dot 1, norms sqrt(2) and 1
        let v1 = vec_of(&[(0, 1.0), (1, 1.0)]);
        let v2 = vec_of(&[(0, 1.0)]);

        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((v1.cosine_sim(&v2) - expected).abs() < 1e-12);
    }
}
