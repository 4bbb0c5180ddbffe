// src/scalar/traits.rs

use crate::scalar::Scalar;
use num_traits::{One, Zero};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Scalar {
    /// Clones the handle, not the node: the clone shares the same graph
    /// vertex, so gradients accumulated through one handle are visible
    /// through the other.
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Scalar {
    /// Node identity, not value equality: two handles are equal iff they
    /// point at the same graph vertex. Two leaves built from the same number
    /// are distinct vertices. Compare `value()` for numeric equality.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    /// Hashes node identity, consistent with `PartialEq`. Lets visited sets
    /// and adjoint maps key on the graph vertex itself.
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.data).hash(state);
    }
}

// --- Scalar promotion ---
// Raw numbers participate in arithmetic on either side of a node by being
// promoted to a fresh leaf at the operator boundary. These conversions are
// that boundary.

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::new(value as f64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::new(value as f64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::new(value as f64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::new(value as f64)
    }
}

// --- Numeric ecosystem integration ---

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::new(1.0)
    }

    fn is_one(&self) -> bool {
        self.value() == 1.0
    }
}

impl Sum for Scalar {
    /// Folds with graph-building addition, so the sum is differentiable.
    /// An empty iterator sums to a fresh zero leaf.
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}
