// src/node/mod.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::Operation;
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod operators;
mod traits;

#[cfg(test)]
mod tests;

/// Internal storage for a [`Node`].
///
/// Everything except `grad` is fixed at construction. The gradient sits behind
/// its own `RwLock` so that gradient rules can accumulate into a node that is
/// shared by many consumers, and so that `Node` stays `Send + Sync`.
pub(crate) struct NodeData {
    /// Forward value, computed once when the node is created.
    pub(crate) value: f64,
    /// Gradient accumulator. Starts at 0.0.
    pub(crate) grad: RwLock<f64>,
    /// The primitive that produced this node. `None` for leaves.
    pub(crate) operation: Option<Operation>,
    /// Inputs of `operation`, in call order. Empty for leaves.
    pub(crate) operands: Vec<Node>,
}

impl Drop for NodeData {
    // Unlinks operands iteratively so that dropping a deep chain does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(node) = pending.pop() {
            if let Ok(mut data) = Arc::try_unwrap(node.data) {
                pending.append(&mut data.operands);
            }
        }
    }
}

/// A scalar value recorded in the computation graph.
///
/// `Node` is a cheap handle around `Arc<NodeData>`:
/// 1.  **Shared Ownership:** a node can be the operand of any number of
///     downstream nodes; cloning a `Node` clones the handle, not the value.
/// 2.  **Identity:** two handles are the same graph node only if they point to
///     the same allocation (see [`Node::id`]). Equal values do not make equal
///     nodes.
///
/// Operands can only reference nodes that already exist when an operation runs,
/// so graphs built through this API are always acyclic.
pub struct Node {
    pub(crate) data: Arc<NodeData>,
}

/// Identity key of a [`Node`], derived from the address of its shared data.
///
/// Only meaningful while the node is alive; the traversal holds clones of every
/// node it has keyed, so ids cannot be reused under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Node {
    /// Creates a leaf node holding `value`, with no operation and no operands.
    pub fn new(value: f64) -> Self {
        Node {
            data: Arc::new(NodeData {
                value,
                grad: RwLock::new(0.0),
                operation: None,
                operands: Vec::new(),
            }),
        }
    }

    /// Creates a node produced by `operation` from `operands`, with an explicit
    /// forward `value`.
    ///
    /// Used by the primitive operations, which compute `value` themselves. The
    /// operand count must match [`BackwardOp::arity`].
    pub(crate) fn from_operation(value: f64, operation: Operation, operands: Vec<Node>) -> Self {
        debug_assert_eq!(operands.len(), operation.arity());
        Node {
            data: Arc::new(NodeData {
                value,
                grad: RwLock::new(0.0),
                operation: Some(operation),
                operands,
            }),
        }
    }

    /// Creates a node for `operation` by hand, validating the operand count.
    ///
    /// The forward value is taken as given, which allows recording composite
    /// results (such as a floored quotient) against a differentiable chain.
    ///
    /// # Errors
    /// Returns `ScalarustError::ArityMismatch` if `operands.len()` differs from
    /// `operation.arity()`.
    pub fn try_from_operation(
        value: f64,
        operation: Operation,
        operands: Vec<Node>,
    ) -> Result<Self, ScalarustError> {
        if operands.len() != operation.arity() {
            return Err(ScalarustError::ArityMismatch {
                operation,
                expected: operation.arity(),
                actual: operands.len(),
            });
        }
        Ok(Self::from_operation(value, operation, operands))
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        *self.data.grad.read().expect("RwLock poisoned")
    }

    /// Overwrites the gradient. Used by the backward driver to seed the root.
    pub fn set_grad(&self, grad: f64) {
        *self.data.grad.write().expect("RwLock poisoned") = grad;
    }

    /// Adds `delta` to the gradient. This is the only way gradient rules touch
    /// a node.
    pub fn accumulate_grad(&self, delta: f64) {
        *self.data.grad.write().expect("RwLock poisoned") += delta;
    }

    /// Resets the gradient to 0.0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// The primitive that produced this node, if any.
    pub fn operation(&self) -> Option<Operation> {
        self.data.operation
    }

    /// The inputs this node was computed from, in call order.
    pub fn operands(&self) -> &[Node] {
        &self.data.operands
    }

    /// `true` if the node was created directly from a scalar.
    pub fn is_leaf(&self) -> bool {
        self.data.operation.is_none()
    }

    /// Returns the identity key of this node.
    pub fn id(&self) -> NodeId {
        NodeId(Arc::as_ptr(&self.data) as usize)
    }

    /// `true` if both handles refer to the same graph node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}
