// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::scalar::Scalar;
use std::ops::Div;

// --- Forward Operation ---

/// Divides `a` by `b`, recording the operation in the graph.
///
/// Division is not a primitive: `a / b` desugars to `a * b^(-1)` before the
/// graph is built, so the built graph contains a POW node (the inverse, with
/// a promoted `-1` exponent leaf) and a MUL node, and the backward-rule table
/// needs no DIV entry.
///
/// Two consequences of the desugaring:
/// - `b == 0` yields an infinite forward value (f64 semantics), not an error;
/// - a backward pass over the result requires `b.value() > 0`, because the
///   inverse is a POW node and its rule takes `ln(b)`. A negative divisor
///   therefore reports [`crate::ScalarGradError::NonPositivePowBase`] at
///   backward time.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    mul_op(a, &pow_op(b, &Scalar::new(-1.0)))
}

// --- Operator Overloads ---

impl Div for &Scalar {
    type Output = Scalar;
    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(self, rhs)
    }
}

impl Div for Scalar {
    type Output = Scalar;
    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&self, &rhs)
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Scalar;
    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(&self, rhs)
    }
}

impl Div<Scalar> for &Scalar {
    type Output = Scalar;
    fn div(self, rhs: Scalar) -> Scalar {
        div_op(self, &rhs)
    }
}

impl Div<f64> for &Scalar {
    type Output = Scalar;
    fn div(self, rhs: f64) -> Scalar {
        div_op(self, &Scalar::new(rhs))
    }
}

impl Div<f64> for Scalar {
    type Output = Scalar;
    fn div(self, rhs: f64) -> Scalar {
        div_op(&self, &Scalar::new(rhs))
    }
}

impl Div<&Scalar> for f64 {
    type Output = Scalar;
    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(&Scalar::new(self), rhs)
    }
}

impl Div<Scalar> for f64 {
    type Output = Scalar;
    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
