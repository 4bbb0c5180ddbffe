// src/autograd/rules.rs
use crate::error::ScalarGradError;
use crate::types::Op;

/// Computes the two local gradients to propagate to an operation's operands.
///
/// Pure function of `(op, a, b, grad)` where `a`/`b` are the operand forward
/// values and `grad` is the upstream gradient flowing into the result:
///
/// - ADD: `(grad, grad)` — addition passes the upstream gradient through
///   unchanged to both operands.
/// - MUL: `(grad * b, grad * a)`.
/// - POW: `(grad * b * a^(b-1), grad * a^b * ln(a))`. The exponent term only
///   matters when the exponent is itself a variable; for a constant-leaf
///   exponent its accumulated gradient is simply unused by the caller.
///
/// # Errors
/// POW with `a <= 0.0`: the exponent gradient takes `ln(a)`, which is
/// undefined there, so the rule reports
/// [`ScalarGradError::NonPositivePowBase`] instead of coercing. A NaN base
/// fails neither comparison and propagates NaN silently, per the engine's
/// IEEE 754 policy.
pub fn local_grads(op: Op, a: f64, b: f64, grad: f64) -> Result<(f64, f64), ScalarGradError> {
    match op {
        Op::Add => Ok((grad, grad)),
        Op::Mul => Ok((grad * b, grad * a)),
        Op::Pow => {
            if a <= 0.0 {
                return Err(ScalarGradError::NonPositivePowBase {
                    base: a,
                    exponent: b,
                });
            }
            Ok((grad * b * a.powf(b - 1.0), grad * a.powf(b) * a.ln()))
        }
    }
}
