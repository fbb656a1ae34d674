use crate::node::Node;
use crate::ops::comparison::{compare_op, route_backward};
use crate::ops::Operation;

/// Records `a == b` as `1.0` or `0.0`. Compares forward values, not node identity.
pub fn equal_op(a: &Node, b: &Node) -> Node {
    compare_op(a, b, Operation::Eq, |x, y| x == y)
}

/// Routes `grad` to `a` when `a == b`, otherwise to `b`.
pub(crate) fn equal_backward(grad: f64, a: &Node, b: &Node) {
    route_backward(grad, a, b, |x, y| x == y)
}

impl Node {
    /// See [`equal_op`].
    pub fn equal(&self, other: &Node) -> Node {
        equal_op(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::leaf;

    #[test]
    fn test_equal_distinct_nodes_with_same_value() {
        let a = leaf(4.0);
        let b = leaf(4.0);
        let eq = a.equal(&b);
        assert_eq!(eq.value(), 1.0);
        // Equal values, still two graph nodes.
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.id(), b.id());
    }
}
