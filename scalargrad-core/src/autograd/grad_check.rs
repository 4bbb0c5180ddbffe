// src/autograd/grad_check.rs
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input at index {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must build its expression from the leaves it is given, so the
/// checker can rebuild the graph with perturbed inputs (graphs are
/// append-only; there is no way to re-evaluate an existing one). For each
/// input `i` the numerical gradient is
/// `(f(..., x_i + eps, ...) - f(..., x_i - eps, ...)) / (2 * eps)`,
/// compared against the backward pass's analytical gradient with combined
/// relative/absolute tolerance `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    // --- Analytical gradients ---
    let leaves: Vec<Scalar> = inputs.iter().map(|&x| Scalar::new(x)).collect();
    let output = func(&leaves);
    output.backward()?;

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        // --- Numerical gradient by central difference ---
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;

        let loss_plus = func(&plus.iter().map(|&x| Scalar::new(x)).collect::<Vec<_>>()).value();
        let loss_minus = func(&minus.iter().map(|&x| Scalar::new(x)).collect::<Vec<_>>()).value();
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}
