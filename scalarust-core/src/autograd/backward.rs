use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::node::Node;
use log::{debug, trace};

/// Runs the backward pass over an ordering produced by [`super::traverse`].
///
/// Seeds `order[0]` (the root) with a gradient of `1.0`, then walks the
/// ordering and applies each non-leaf node's gradient rule. No other node is
/// seeded; every other gradient is accumulated by the rules. An empty ordering
/// is a no-op.
///
/// Precondition: `order` came from `traverse` on the intended root. Any other
/// ordering may run a node's rule before all of its consumers have contributed
/// to its gradient.
///
/// Gradients accumulate across calls. Reset them with [`zero_grads`] before
/// running a second pass over the same graph.
///
/// # Errors
/// Returns `ScalarustError::ArityMismatch` if a node's operands do not match its
/// operation.
pub fn backpropagate(order: &[Node]) -> Result<(), ScalarustError> {
    let Some(root) = order.first() else {
        debug!("backpropagate: empty ordering, nothing to do");
        return Ok(());
    };

    debug!(
        "backpropagate: seeding root {} and visiting {} node(s)",
        root,
        order.len()
    );
    root.set_grad(1.0);

    for node in order {
        let Some(operation) = node.operation() else {
            continue;
        };
        if node.operands().is_empty() {
            continue;
        }
        trace!(
            "backpropagate: applying '{}' rule with upstream grad {}",
            operation,
            node.grad()
        );
        operation.backward(node)?;
    }

    debug!("backpropagate: done");
    Ok(())
}

/// Resets the gradient of every node in `order` to `0.0`.
pub fn zero_grads(order: &[Node]) {
    for node in order {
        node.zero_grad();
    }
}
