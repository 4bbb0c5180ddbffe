// src/scalar/mod.rs

use crate::scalar_data::ScalarData;
use crate::types::Op;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

// --- Implementation modules ---
mod accessors;
mod autograd_methods;
mod debug;
mod traits;

/// One scalar quantity in the computation graph.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally to allow for:
/// 1. **Shared Ownership:** the same node may be an operand of several
///    parents (graph sharing), and cloning a `Scalar` only bumps the
///    reference count — it never copies the node.
/// 2. **Interior Mutability:** the `grad` field is mutated through immutable
///    handles during the backward and reset traversals.
///
/// The engine is single-threaded by design (`Rc`, not `Arc`), matching its
/// synchronous, recursion-free traversal model.
pub struct Scalar {
    /// Rc for shared ownership, RefCell for interior mutability of the grad.
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Creates a new leaf node (a constant or an independent variable) from a
    /// numeric value. Its gradient starts at 0.0.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::leaf(value))),
        }
    }

    /// Creates the result node of a binary operation. Exactly one node is
    /// allocated; the operands are captured by handle, never copied.
    pub(crate) fn from_op(value: f64, op: Op, a: &Scalar, b: &Scalar) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::from_op(
                value,
                op,
                a.clone(),
                b.clone(),
            ))),
        }
    }

    /// Borrows the node's data immutably.
    ///
    /// Panics if the data is already mutably borrowed; traversals never hold
    /// a borrow across a call that borrows again, so this cannot happen from
    /// within the engine.
    pub(crate) fn borrow_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    /// Borrows the node's data mutably (gradient updates only).
    pub(crate) fn borrow_data_mut(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }
}
