// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::Scalar;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtracts `b` from `a`, recording the operation in the graph.
///
/// Subtraction is not a primitive: `a - b` desugars to `a + (-1 * b)` before
/// the graph is built, so the built graph contains a MUL node (the negation,
/// with a promoted `-1` leaf) and an ADD node, and the backward-rule table
/// needs no SUB entry. The gradients w.r.t. `a` and `b` are identical to a
/// primitive subtraction's (1 and -1).
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &mul_op(&Scalar::new(-1.0), b))
}

// --- Operator Overloads ---

impl Sub for &Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&self, &rhs)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(&self, rhs)
    }
}

impl Sub<Scalar> for &Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(self, &rhs)
    }
}

impl Sub<f64> for &Scalar {
    type Output = Scalar;
    fn sub(self, rhs: f64) -> Scalar {
        sub_op(self, &Scalar::new(rhs))
    }
}

impl Sub<f64> for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: f64) -> Scalar {
        sub_op(&self, &Scalar::new(rhs))
    }
}

impl Sub<&Scalar> for f64 {
    type Output = Scalar;
    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(&Scalar::new(self), rhs)
    }
}

impl Sub<Scalar> for f64 {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
