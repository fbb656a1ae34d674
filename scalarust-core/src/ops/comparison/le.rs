use crate::node::Node;
use crate::ops::comparison::{compare_op, route_backward};
use crate::ops::Operation;

/// Records `a <= b` as `1.0` or `0.0`.
pub fn le_op(a: &Node, b: &Node) -> Node {
    compare_op(a, b, Operation::Le, |x, y| x <= y)
}

/// Routes `grad` to `a` when `a <= b`, otherwise to `b`.
pub(crate) fn le_backward(grad: f64, a: &Node, b: &Node) {
    route_backward(grad, a, b, |x, y| x <= y)
}

impl Node {
    /// See [`le_op`].
    pub fn le(&self, other: &Node) -> Node {
        le_op(self, other)
    }
}
