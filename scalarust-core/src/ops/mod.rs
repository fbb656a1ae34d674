//! # Scalar Operations Module (`ops`)
//!
//! This module defines the primitive differentiable operations of the engine
//! and the derived operations built from them.
//!
//! ## Structure:
//!
//! - **[`Operation`]:** the closed set of primitives. Every non-leaf [`Node`]
//!   records one of these, and it is the only thing the backward pass needs to
//!   pick a gradient rule. Dispatch is an exhaustive `match`, so adding a
//!   primitive without a gradient rule does not compile.
//! - **`_op` Functions:** each primitive has a forward function (`add_op`,
//!   `pow_op`, ...) that computes the value and records provenance.
//! - **`_backward` Functions:** each primitive has a gradient rule that reads
//!   the output's accumulated gradient and the operands' forward values, and
//!   *adds* contributions into the operands.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, rem, and the derived neg, sub, div, floor_div.
//! - [`comparison`]: ge, gt, le, lt, equal (straight-through gradients).
//! - [`activation`]: relu.

use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::node::Node;
use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod comparison;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, floor_div_op, mul_op, neg_op, pow_op, rem_op, sub_op};
pub use comparison::{equal_op, ge_op, gt_op, le_op, lt_op};

/// The primitive operations a node can be produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Mul,
    Pow,
    Rem,
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
    Relu,
}

impl Operation {
    /// Short symbol used when printing graphs.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Mul => "*",
            Operation::Pow => "**",
            Operation::Rem => "%",
            Operation::Ge => ">=",
            Operation::Gt => ">",
            Operation::Le => "<=",
            Operation::Lt => "<",
            Operation::Eq => "==",
            Operation::Relu => "relu",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl BackwardOp for Operation {
    fn arity(&self) -> usize {
        match self {
            Operation::Relu => 1,
            Operation::Add
            | Operation::Mul
            | Operation::Pow
            | Operation::Rem
            | Operation::Ge
            | Operation::Gt
            | Operation::Le
            | Operation::Lt
            | Operation::Eq => 2,
        }
    }

    fn backward(&self, out: &Node) -> Result<(), ScalarustError> {
        let grad = out.grad();
        match (self, out.operands()) {
            (Operation::Add, [a, b]) => arithmetic::add::add_backward(grad, a, b),
            (Operation::Mul, [a, b]) => arithmetic::mul::mul_backward(grad, a, b),
            (Operation::Pow, [base, exponent]) => {
                arithmetic::pow::pow_backward(grad, base, exponent)
            }
            (Operation::Rem, [a, b]) => arithmetic::rem::rem_backward(grad, a, b),
            (Operation::Ge, [a, b]) => comparison::ge::ge_backward(grad, a, b),
            (Operation::Gt, [a, b]) => comparison::gt::gt_backward(grad, a, b),
            (Operation::Le, [a, b]) => comparison::le::le_backward(grad, a, b),
            (Operation::Lt, [a, b]) => comparison::lt::lt_backward(grad, a, b),
            (Operation::Eq, [a, b]) => comparison::equal::equal_backward(grad, a, b),
            (Operation::Relu, [input]) => activation::relu::relu_backward(grad, input),
            (operation, operands) => {
                return Err(ScalarustError::ArityMismatch {
                    operation: *operation,
                    expected: operation.arity(),
                    actual: operands.len(),
                })
            }
        }
        Ok(())
    }
}
