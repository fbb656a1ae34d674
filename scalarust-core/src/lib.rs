//! # scalarust-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Arithmetic on [`Node`]s records a directed acyclic graph of values. Calling
//! [`autograd::traverse`] on a result orders every contributing node so that
//! consumers come before the nodes they consume, and
//! [`autograd::backpropagate`] then sweeps that order once, accumulating
//! gradients into every node.
//!
//! ```
//! use scalarust_core::Node;
//! use scalarust_core::autograd::{backpropagate, traverse};
//!
//! let x = Node::new(2.0);
//! let y = Node::new(3.0);
//! let z = &x * &y + &x;
//!
//! let order = traverse(&z);
//! backpropagate(&order).unwrap();
//!
//! assert_eq!(x.grad(), 4.0); // y + 1
//! assert_eq!(y.grad(), 2.0); // x
//! ```

// Main modules of the crate
pub mod autograd;
pub mod node;
pub mod ops;

pub(crate) mod utils;

pub mod error;

// Re-export the core types so they are reachable as `scalarust_core::Node` etc.
pub use error::ScalarustError;
pub use node::{Node, NodeId};
pub use ops::Operation;
