// src/scalar_data.rs
use crate::scalar::Scalar;
use crate::types::Op;

/// The record a non-leaf node carries about the operation that produced it:
/// the operation tag and the two operand handles. Keeping the tag and the
/// operand pair in one struct makes "an operation without operands" (or the
/// reverse) unrepresentable.
#[derive(Debug, Clone)]
pub struct Origin {
    /// Which primitive operation produced the node.
    pub(crate) op: Op,
    /// The two inputs of that operation. Ownership is shared: the same node
    /// may be an operand of several parents.
    pub(crate) operands: [Scalar; 2],
}

/// Internal storage for a `Scalar` node.
///
/// Holds the forward value, the gradient accumulator, and the provenance of
/// the node. It is wrapped in `Rc<RefCell<ScalarData>>` by the `Scalar`
/// handle to allow shared ownership and interior mutability of `grad`.
#[derive(Debug)]
pub struct ScalarData {
    /// The forward-computed value. Fixed at construction, never mutated.
    pub(crate) value: f64,
    /// Accumulator for d(root)/d(this node). Starts at 0.0; the backward
    /// traversal only ever adds to it, so contributions from multiple parents
    /// sum correctly. Reset to 0.0 by `zero_grad`.
    pub(crate) grad: f64,
    /// `None` for leaf nodes (constants and independent variables); the
    /// producing operation and its operands otherwise.
    pub(crate) origin: Option<Origin>,
}

impl ScalarData {
    /// Creates the data record for a leaf node.
    pub(crate) fn leaf(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            origin: None,
        }
    }

    /// Creates the data record for the result of a binary operation.
    pub(crate) fn from_op(value: f64, op: Op, a: Scalar, b: Scalar) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            origin: Some(Origin {
                op,
                operands: [a, b],
            }),
        }
    }
}
