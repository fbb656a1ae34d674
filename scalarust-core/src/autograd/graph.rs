use crate::node::{Node, NodeId};
use log::debug;
use std::collections::HashSet;

/// Orders every node reachable from `root` for the backward pass.
///
/// Returns each reachable node exactly once, `root` first, such that every node
/// appears after all of the nodes that consume it (reverse topological order).
/// The backward driver relies on this: by the time a node's gradient rule runs,
/// all of its consumers have finished accumulating into it.
///
/// Implemented as a depth-first post-order walk, then reversed. Nodes are keyed
/// by identity ([`Node::id`]), never by value, so distinct nodes with equal
/// values stay distinct. Operands are visited in their recorded order, which
/// makes the result deterministic. The walk uses an explicit stack, so deep
/// chains do not grow the call stack.
pub fn traverse(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut post_order: Vec<Node> = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(Node, usize)> = vec![(root.clone(), 0)];
    visited.insert(root.id());

    while let Some((node, next_operand)) = stack.pop() {
        let operand = node.operands().get(next_operand).cloned();
        match operand {
            Some(operand) => {
                stack.push((node, next_operand + 1));
                if visited.insert(operand.id()) {
                    stack.push((operand, 0));
                }
            }
            None => post_order.push(node),
        }
    }

    post_order.reverse();
    debug!("traverse: {} node(s) reachable from root", post_order.len());
    post_order
}
