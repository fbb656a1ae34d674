// src/ops/arithmetic/div.rs

use crate::node::Node;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use crate::ops::Operation;

/// Divides `a` by `b`.
///
/// Not a primitive: recorded as `a * b^-1`. Division by zero gives an infinite
/// (or NaN) reciprocal, propagated as a value.
pub fn div_op(a: &Node, b: &Node) -> Node {
    mul_op(a, &reciprocal(b))
}

/// Floor division.
///
/// Records the same `a * b^-1` graph as [`div_op`], but the output node's value
/// is `floor(a * b^-1)`. Only the value is floored: the backward pass
/// differentiates the un-floored product, so gradients are those of true
/// division. Floor has zero derivative almost everywhere; this operation
/// intentionally does not model that.
pub fn floor_div_op(a: &Node, b: &Node) -> Node {
    let inverse = reciprocal(b);
    let value = (a.value() * inverse.value()).floor();
    Node::from_operation(value, Operation::Mul, vec![a.clone(), inverse])
}

fn reciprocal(b: &Node) -> Node {
    pow_op(b, &Node::new(-1.0))
}

impl Node {
    /// Floor division. See [`floor_div_op`].
    pub fn floor_div(&self, divisor: &Node) -> Node {
        floor_div_op(self, divisor)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
