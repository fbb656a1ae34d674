use crate::node::Node;
use crate::ops::comparison::{compare_op, route_backward};
use crate::ops::Operation;

/// Records `a >= b` as `1.0` or `0.0`.
pub fn ge_op(a: &Node, b: &Node) -> Node {
    compare_op(a, b, Operation::Ge, |x, y| x >= y)
}

/// Routes `grad` to `a` when `a >= b`, otherwise to `b`.
pub(crate) fn ge_backward(grad: f64, a: &Node, b: &Node) {
    route_backward(grad, a, b, |x, y| x >= y)
}

impl Node {
    /// See [`ge_op`].
    pub fn ge(&self, other: &Node) -> Node {
        ge_op(self, other)
    }
}
