use crate::scalar::Scalar;

/// Checks that a node's forward value is within tolerance of the expected
/// value. Panics with a descriptive message otherwise. Test-support only.
pub fn check_scalar_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let value = actual.value();
    let diff = (value - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value, expected, diff, tolerance
        );
    }
}

/// Like [`check_scalar_near`], but for the accumulated gradient.
pub fn check_grad_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    let diff = (grad - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}
