// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::scalar::Scalar;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates a node.
///
/// Negation is not a primitive: it desugars to `multiply(-1, a)`, allocating
/// the promoted `-1` leaf plus the MUL node. Subtraction builds on the same
/// desugaring.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(&Scalar::new(-1.0), a)
}

// --- Operator Overloads ---

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
