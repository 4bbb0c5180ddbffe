use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The backward rule of `pow` needs `ln(base)` for the exponent gradient,
    /// which is only defined for a strictly positive base. Surfaced when the
    /// backward traversal actually processes the offending node.
    #[error("Power backward rule requires a positive base: got base {base} with exponent {exponent}")]
    NonPositivePowBase { base: f64, exponent: f64 },
}
