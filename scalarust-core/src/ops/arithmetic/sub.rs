use crate::node::Node;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};

/// Subtracts `b` from `a`.
///
/// Not a primitive: recorded as `a + (b * -1)`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    add_op(a, &neg_op(b))
}
