// src/ops/comparison/mod.rs

//! # Comparison Operations
//!
//! Comparisons produce `1.0` when the predicate holds and `0.0` otherwise, and
//! they are recorded in the graph like any other operation.
//!
//! Comparisons are not differentiable. Their gradient rules are
//! straight-through estimators: the whole output gradient is routed to the
//! operand that "wins" the comparison (`a` when the predicate holds, `b`
//! otherwise) and the other operand receives nothing. This keeps graphs that
//! branch on comparisons differentiable end to end.
//!
//! ## Currently Implemented:
//! - [`ge_op`](ge/fn.ge_op.html): `a >= b`
//! - [`gt_op`](gt/fn.gt_op.html): `a > b`
//! - [`le_op`](le/fn.le_op.html): `a <= b`
//! - [`lt_op`](lt/fn.lt_op.html): `a < b`
//! - [`equal_op`](equal/fn.equal_op.html): `a == b`

use crate::node::Node;
use crate::ops::Operation;

pub mod equal;
pub mod ge;
pub mod gt;
pub mod le;
pub mod lt;

pub use equal::equal_op;
pub use ge::ge_op;
pub use gt::gt_op;
pub use le::le_op;
pub use lt::lt_op;

/// Records `operation` applied to `a` and `b`, with value `1.0` if `predicate`
/// holds on their forward values and `0.0` otherwise.
fn compare_op(a: &Node, b: &Node, operation: Operation, predicate: fn(f64, f64) -> bool) -> Node {
    let value = if predicate(a.value(), b.value()) { 1.0 } else { 0.0 };
    Node::from_operation(value, operation, vec![a.clone(), b.clone()])
}

/// Straight-through gradient: `grad` goes to `a` if `predicate` holds on the
/// forward values, to `b` otherwise.
fn route_backward(grad: f64, a: &Node, b: &Node, predicate: fn(f64, f64) -> bool) {
    if predicate(a.value(), b.value()) {
        a.accumulate_grad(grad);
    } else {
        b.accumulate_grad(grad);
    }
}
