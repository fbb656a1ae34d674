use crate::node::Node;
use crate::ops::Operation;

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
pub fn relu_op(input: &Node) -> Node {
    Node::from_operation(input.value().max(0.0), Operation::Relu, vec![input.clone()])
}

/// Gradient rule for `relu`: the output gradient passes through only where the
/// input is strictly positive.
pub(crate) fn relu_backward(grad: f64, input: &Node) {
    let local = if input.value() > 0.0 { grad } else { 0.0 };
    input.accumulate_grad(local);
}

impl Node {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(&self) -> Node {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
