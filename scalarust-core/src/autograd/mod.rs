//! # Autograd
//!
//! Reverse-mode differentiation over the graph recorded by [`crate::ops`].
//!
//! - [`graph::traverse`] orders every node reachable from a root so that each
//!   node comes after all of its consumers.
//! - [`backward::backpropagate`] seeds the root and applies each node's
//!   gradient rule in that order.
//! - [`grad_check`] compares the resulting gradients against finite differences.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::{backpropagate, zero_grads};
pub use backward_op::BackwardOp;
pub use graph::traverse;
