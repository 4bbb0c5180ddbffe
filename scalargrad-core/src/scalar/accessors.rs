// src/scalar/accessors.rs
use crate::scalar::Scalar;
use crate::types::Op;
use std::rc::Rc;

impl Scalar {
    /// Returns the forward-computed value of this node.
    pub fn value(&self) -> f64 {
        self.borrow_data().value
    }

    /// Returns the currently accumulated gradient d(root)/d(this node).
    ///
    /// 0.0 until a backward pass has reached this node.
    pub fn grad(&self) -> f64 {
        self.borrow_data().grad
    }

    /// Returns the operation that produced this node, or `None` for a leaf.
    pub fn op(&self) -> Option<Op> {
        self.borrow_data().origin.as_ref().map(|o| o.op)
    }

    /// Returns handles to the two operands that produced this node, or
    /// `None` for a leaf. Cloning the handles shares the nodes; it does not
    /// copy them.
    pub fn operands(&self) -> Option<(Scalar, Scalar)> {
        self.borrow_data()
            .origin
            .as_ref()
            .map(|o| (o.operands[0].clone(), o.operands[1].clone()))
    }

    /// Whether this node is a leaf (no producing operation).
    pub fn is_leaf(&self) -> bool {
        self.borrow_data().origin.is_none()
    }

    /// A stable identifier for this node, unique for as long as the node is
    /// alive. Two handles to the same node report the same id; external graph
    /// renderers use it to deduplicate shared operands.
    pub fn node_id(&self) -> usize {
        Rc::as_ptr(&self.data) as usize
    }
}
