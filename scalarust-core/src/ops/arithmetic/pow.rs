// src/ops/arithmetic/pow.rs

use crate::node::Node;
use crate::ops::Operation;

/// Raises `base` to the power `exponent`: `base ** exponent`.
///
/// Real exponentiation only. A negative base with a non-integer exponent yields
/// NaN, which is recorded as the node's value like any other result.
pub fn pow_op(base: &Node, exponent: &Node) -> Node {
    Node::from_operation(
        base.value().powf(exponent.value()),
        Operation::Pow,
        vec![base.clone(), exponent.clone()],
    )
}

/// Gradient rule for `pow`.
///
/// - `d/d base     = exponent * base^(exponent - 1)`
/// - `d/d exponent = base^exponent * ln(base)`
///
/// The exponent's contribution is NaN (or infinite) when `base <= 0`, matching
/// the domain of the natural logarithm. It is accumulated anyway.
pub(crate) fn pow_backward(grad: f64, base: &Node, exponent: &Node) {
    let (b, e) = (base.value(), exponent.value());
    base.accumulate_grad(grad * e * b.powf(e - 1.0));
    exponent.accumulate_grad(grad * b.powf(e) * b.ln());
}

impl Node {
    /// Raises this node to the power `exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: &Node) -> Node {
        pow_op(self, exponent)
    }

    /// Raises this node to a constant power, recorded as a fresh leaf exponent.
    pub fn powf(&self, exponent: f64) -> Node {
        pow_op(self, &Node::new(exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
