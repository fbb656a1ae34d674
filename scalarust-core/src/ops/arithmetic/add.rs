use crate::node::Node;
use crate::ops::Operation;

/// Adds two nodes: `a + b`.
pub fn add_op(a: &Node, b: &Node) -> Node {
    Node::from_operation(a.value() + b.value(), Operation::Add, vec![a.clone(), b.clone()])
}

/// Gradient rule for `add`: the output gradient flows unchanged to both operands.
pub(crate) fn add_backward(grad: f64, a: &Node, b: &Node) {
    a.accumulate_grad(grad);
    b.accumulate_grad(grad);
}
