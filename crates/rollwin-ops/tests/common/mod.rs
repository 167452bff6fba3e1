//! Common test utilities for rollwin-ops integration tests.
//!
//! Provides NaN-aware float and sequence comparison, since NaN outputs are
//! meaningful (under-determined windows) and must match positionally.

#![allow(dead_code)]

/// NaN-aware float comparison with a relative tolerance for large values.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(
            actual.is_nan(),
            "{}: expected NaN but got {}",
            context,
            actual
        );
        return;
    }

    if actual.is_nan() {
        panic!("{}: got NaN but expected {}", context, expected);
    }

    let tolerance = if expected.abs() > 1.0 {
        epsilon * expected.abs()
    } else {
        epsilon
    };
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} but got {} (diff {}, tolerance {})",
        context,
        expected,
        actual,
        diff,
        tolerance
    );
}

/// Compare two float sequences element-wise, NaN-aware.
pub fn assert_sequence_eq(actual: &[f64], expected: &[f64], epsilon: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch ({} vs {})",
        context,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{}[{}]", context, i));
    }
}
