use crate::node::Node;
use crate::ops::arithmetic::mul::mul_op;

/// Negates a node.
///
/// Not a primitive: recorded as `a * -1`, where `-1` is a fresh leaf. The
/// gradient therefore flows through `mul`.
pub fn neg_op(a: &Node) -> Node {
    mul_op(a, &Node::new(-1.0))
}
