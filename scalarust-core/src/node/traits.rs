// src/node/traits.rs

use crate::node::Node;
use std::fmt::{self, Debug, Display};
use std::iter::Sum;
use std::sync::Arc;

impl Clone for Node {
    /// Clones the handle. Both handles refer to the same graph node, so a
    /// gradient accumulated through one is visible through the other.
    fn clone(&self) -> Self {
        Node {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Node {
    /// Shows value, gradient, operation and operand count. Operands are not
    /// printed recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value())
            .field("grad", &self.grad())
            .field("operation", &self.operation())
            .field("operands", &self.operands().len())
            .finish()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}, operands={})", self.value(), self.operands().len())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::new(value)
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::new(f64::from(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::new(f64::from(value))
    }
}

impl Sum for Node {
    /// Folds the iterator with `add`, starting from a leaf `0.0`.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Node::new(0.0), |acc, node| &acc + &node)
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Self {
        iter.fold(Node::new(0.0), |acc, node| &acc + node)
    }
}
