// scalargrad-core/src/ops/arithmetic/add.rs

use crate::scalar::Scalar;
use crate::types::Op;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two nodes, recording the operation in the graph.
///
/// Allocates exactly one new node with value `a.value() + b.value()`, tagged
/// ADD, holding handles to both operands. Neither operand is mutated.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() + b.value(), Op::Add, a, b)
}

// --- Operator Overloads ---
// The full node/node, node/scalar, scalar/node grid, owned and borrowed, so
// expressions read as ordinary arithmetic. Raw numbers are promoted to a
// fresh leaf at this boundary.

impl Add for &Scalar {
    type Output = Scalar;
    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(self, rhs)
    }
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&self, &rhs)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;
    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(&self, rhs)
    }
}

impl Add<Scalar> for &Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        add_op(self, &rhs)
    }
}

impl Add<f64> for &Scalar {
    type Output = Scalar;
    fn add(self, rhs: f64) -> Scalar {
        add_op(self, &Scalar::new(rhs))
    }
}

impl Add<f64> for Scalar {
    type Output = Scalar;
    fn add(self, rhs: f64) -> Scalar {
        add_op(&self, &Scalar::new(rhs))
    }
}

impl Add<&Scalar> for f64 {
    type Output = Scalar;
    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(&Scalar::new(self), rhs)
    }
}

impl Add<Scalar> for f64 {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
