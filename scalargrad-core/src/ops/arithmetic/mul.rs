// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::scalar::Scalar;
use crate::types::Op;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two nodes, recording the operation in the graph.
///
/// Allocates exactly one new node with value `a.value() * b.value()`, tagged
/// MUL, holding handles to both operands.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() * b.value(), Op::Mul, a, b)
}

// --- Operator Overloads ---

impl Mul for &Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(self, rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&self, &rhs)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(&self, rhs)
    }
}

impl Mul<Scalar> for &Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(self, &rhs)
    }
}

impl Mul<f64> for &Scalar {
    type Output = Scalar;
    fn mul(self, rhs: f64) -> Scalar {
        mul_op(self, &Scalar::new(rhs))
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: f64) -> Scalar {
        mul_op(&self, &Scalar::new(rhs))
    }
}

impl Mul<&Scalar> for f64 {
    type Output = Scalar;
    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(&Scalar::new(self), rhs)
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
