// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Unary non-linearities.
//!
//! ## Currently Implemented:
//! - [`relu_op`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;

pub use relu::relu_op;
