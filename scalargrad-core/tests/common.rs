use scalargrad_core::Scalar;

// Shared helpers for the integration tests. `allow(dead_code)` because each
// test binary compiles this module separately and not all of them use every
// helper.

/// Asserts a value within an absolute tolerance.
#[allow(dead_code)]
pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {expected}, got {actual} (diff {diff} > tolerance {tolerance})"
    );
}

/// Builds independent-variable leaves from raw values.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::new(v)).collect()
}
