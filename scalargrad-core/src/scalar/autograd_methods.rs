// src/scalar/autograd_methods.rs
use crate::autograd::graph::{run_backward, run_zero_grad};
use crate::error::ScalarGradError;
use crate::scalar::Scalar;

impl Scalar {
    /// Performs the backward pass starting from this node, seeding it with
    /// gradient 1.0 ("differentiate the root with respect to itself").
    ///
    /// Every node reachable from this one receives, **added** into its `grad`
    /// accumulator, the sum of d(self)/d(node) contributions over all paths
    /// from here — accumulation, not assignment, is what makes multi-parent
    /// sharing correct, and it is also why [`Scalar::zero_grad`] must be
    /// called between successive backward passes over the same graph.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::NonPositivePowBase`] if the traversal
    /// reaches a power node whose base is not strictly positive (the exponent
    /// gradient needs `ln(base)`). Gradients accumulated before that node was
    /// processed are left in place; re-establish a clean slate with
    /// [`Scalar::zero_grad`].
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with(1.0)
    }

    /// Performs the backward pass with an explicit seed gradient instead of
    /// the default 1.0. Useful when this node is itself an intermediate of a
    /// larger, externally differentiated computation.
    pub fn backward_with(&self, seed: f64) -> Result<(), ScalarGradError> {
        if self.is_leaf() {
            log::debug!("backward on a leaf node: only the seed accumulates");
        }
        run_backward(self, seed)
    }

    /// Resets the gradient of every node reachable from this one to 0.0.
    pub fn zero_grad(&self) {
        run_zero_grad(self)
    }
}
