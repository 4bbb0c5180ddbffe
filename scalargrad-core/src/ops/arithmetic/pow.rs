// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::scalar::Scalar;
use crate::types::Op;
use num_traits::Pow;

// --- Forward Operation ---

/// Raises `base` to `exponent`, recording the operation in the graph.
///
/// The forward value is `base.value().powf(exponent.value())` and is not
/// validated: non-finite results propagate per IEEE 754. The backward rule,
/// however, needs `ln(base)` for the exponent gradient, so a backward pass
/// over this node requires `base.value() > 0` and fails with
/// [`crate::ScalarGradError::NonPositivePowBase`] otherwise.
pub fn pow_op(base: &Scalar, exponent: &Scalar) -> Scalar {
    Scalar::from_op(base.value().powf(exponent.value()), Op::Pow, base, exponent)
}

// --- Scalar Methods ---

impl Scalar {
    /// Raises this node to a constant exponent (promoted to a leaf).
    pub fn powf(&self, exponent: f64) -> Scalar {
        pow_op(self, &Scalar::new(exponent))
    }

    /// Raises this node to a node-valued exponent, so the exponent itself
    /// participates in differentiation.
    pub fn pow(&self, exponent: &Scalar) -> Scalar {
        pow_op(self, exponent)
    }
}

// --- num_traits::Pow Integration ---

impl Pow<&Scalar> for &Scalar {
    type Output = Scalar;
    fn pow(self, rhs: &Scalar) -> Scalar {
        pow_op(self, rhs)
    }
}

impl Pow<Scalar> for Scalar {
    type Output = Scalar;
    fn pow(self, rhs: Scalar) -> Scalar {
        pow_op(&self, &rhs)
    }
}

impl Pow<Scalar> for &Scalar {
    type Output = Scalar;
    fn pow(self, rhs: Scalar) -> Scalar {
        pow_op(self, &rhs)
    }
}

impl Pow<f64> for &Scalar {
    type Output = Scalar;
    fn pow(self, rhs: f64) -> Scalar {
        pow_op(self, &Scalar::new(rhs))
    }
}

impl Pow<f64> for Scalar {
    type Output = Scalar;
    fn pow(self, rhs: f64) -> Scalar {
        pow_op(&self, &Scalar::new(rhs))
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
