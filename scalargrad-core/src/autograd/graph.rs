// src/autograd/graph.rs
use crate::autograd::rules::local_grads;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Identity of a graph vertex: the address of its shared data cell. Stable
/// for as long as any handle keeps the node alive.
pub(crate) type NodeId = *const RefCell<ScalarData>;

/// Returns every node reachable from `root` in topological order (operands
/// before the nodes they feed); `root` is last.
///
/// Deduplicated: a node shared by several parents appears exactly once. Uses
/// an explicit work stack instead of recursion, so graph depth is bounded by
/// heap, not call stack.
pub fn topological_order(root: &Scalar) -> Vec<Scalar> {
    let mut order = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, expanded): a node is pushed back with expanded = true once its
    // operands are on the stack, and emitted only after they have been.
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node.node_ptr()) {
            continue;
        }
        match node.operands() {
            Some((a, b)) => {
                stack.push((node, true));
                stack.push((b, false));
                stack.push((a, false));
            }
            None => order.push(node),
        }
    }
    order
}

/// Backward pass: accumulates `seed` into `root.grad`, then propagates
/// gradients to every ancestor via the chain rule.
///
/// Single pass in reverse topological order: each node is processed exactly
/// once, after all its parents, with its incoming contributions summed in an
/// adjoint map first. This is linear in graph size and produces gradients
/// identical to walking every root-to-node path independently, because
/// summing contributions before propagation distributes over the chain rule.
///
/// A POW node's rule is evaluated whenever the node is processed, even if its
/// summed contribution is 0.0, so a non-positive base always surfaces its
/// domain error. On error, gradients already accumulated stay in place.
pub(crate) fn run_backward(root: &Scalar, seed: f64) -> Result<(), ScalarGradError> {
    let order = topological_order(root);
    log::debug!(
        "backward pass over {} nodes (seed {})",
        order.len(),
        seed
    );

    let mut adjoints: HashMap<NodeId, f64> = HashMap::with_capacity(order.len());
    adjoints.insert(root.node_ptr(), seed);

    for node in order.iter().rev() {
        // Every reachable node has received its full contribution by the time
        // reverse order gets to it; the root was seeded above.
        let contribution = match adjoints.remove(&node.node_ptr()) {
            Some(g) => g,
            None => continue,
        };
        node.borrow_data_mut().grad += contribution;

        let origin = node.borrow_data().origin.clone();
        if let Some(origin) = origin {
            let [a, b] = &origin.operands;
            let (grad_a, grad_b) = local_grads(origin.op, a.value(), b.value(), contribution)?;
            *adjoints.entry(a.node_ptr()).or_insert(0.0) += grad_a;
            *adjoints.entry(b.node_ptr()).or_insert(0.0) += grad_b;
        }
    }
    Ok(())
}

/// Reset walk: sets `grad = 0.0` on every node reachable from `root`.
/// Deduplicated and stack-based like the other traversals.
pub(crate) fn run_zero_grad(root: &Scalar) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if !visited.insert(node.node_ptr()) {
            continue;
        }
        node.borrow_data_mut().grad = 0.0;
        if let Some((a, b)) = node.operands() {
            stack.push(a);
            stack.push(b);
        }
    }
}

impl Scalar {
    /// Raw vertex identity for traversal bookkeeping.
    pub(crate) fn node_ptr(&self) -> NodeId {
        std::rc::Rc::as_ptr(&self.data)
    }
}
