//! Shared helpers for probscale-stats integration tests

/// Assert two slices agree element-wise within `tol`
pub fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {:?} vs {:?}",
        actual,
        expected
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {}: {} differs from {} by more than {}",
            i,
            a,
            e,
            tol
        );
    }
}

/// The five-point sample used throughout the known-value checks
pub fn one_to_five() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0]
}
