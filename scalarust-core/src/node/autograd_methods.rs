use crate::autograd::{backpropagate, traverse};
use crate::error::ScalarustError;
use crate::node::Node;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// Equivalent to `backpropagate(&traverse(self))`: this node's gradient is
    /// seeded to `1.0` and every node it depends on receives its accumulated
    /// gradient.
    ///
    /// Gradients are accumulated, not reset. Call [`crate::autograd::zero_grads`]
    /// on the traversal (or [`Node::zero_grad`] on individual nodes) before
    /// running a second pass over the same graph.
    ///
    /// # Errors
    /// Returns `ScalarustError::ArityMismatch` if a node's operands do not match
    /// its operation.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        let order = traverse(self);
        backpropagate(&order)
    }

    /// Returns every node this node depends on (itself included), consumers
    /// before the nodes they consume. See [`crate::autograd::traverse`].
    pub fn topological_order(&self) -> Vec<Node> {
        traverse(self)
    }
}
