use crate::node::{Node, NodeData};
use crate::ops::Operation;
use std::sync::{Arc, RwLock};

/// Checks that `actual` is within `tolerance` of `expected`.
/// Panics with both values if it is not.
pub(crate) fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Helper to create a leaf node for tests.
pub(crate) fn leaf(value: f64) -> Node {
    Node::new(value)
}

/// Builds a node without checking that `operands` matches `operation`'s arity.
/// Only for exercising the backward pass's own arity check.
pub(crate) fn malformed_node(value: f64, operation: Operation, operands: Vec<Node>) -> Node {
    Node {
        data: Arc::new(NodeData {
            value,
            grad: RwLock::new(0.0),
            operation: Some(operation),
            operands,
        }),
    }
}
