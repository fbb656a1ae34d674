use crate::node::Node;
use crate::ops::Operation;

/// Multiplies two nodes: `a * b`.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    Node::from_operation(a.value() * b.value(), Operation::Mul, vec![a.clone(), b.clone()])
}

/// Gradient rule for `mul`: each operand receives the output gradient scaled by
/// the other operand's forward value.
pub(crate) fn mul_backward(grad: f64, a: &Node, b: &Node) {
    // Read both values before touching either gradient: `a` and `b` may be the same node.
    let (a_value, b_value) = (a.value(), b.value());
    a.accumulate_grad(grad * b_value);
    b.accumulate_grad(grad * a_value);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
