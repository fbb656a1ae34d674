use crate::error::ScalarustError;
use crate::node::Node;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Every non-leaf [`Node`] records the operation that produced it, and the
/// backward driver calls `backward` on it with the node itself as `out`. The
/// implementation for the built-in primitives is [`crate::ops::Operation`].
///
/// The trait requires `Debug + Send + Sync` so that operation tags can be
/// stored in nodes that are shared across threads.
pub trait BackwardOp: Debug + Send + Sync {
    /// Number of operands this operation takes.
    fn arity(&self) -> usize;

    /// Distributes `out`'s accumulated gradient to its operands.
    ///
    /// Reads `out.grad()` (which must already hold every consumer's
    /// contribution) and the operands' forward values, then *adds* a
    /// contribution into each operand's gradient. It never overwrites: an
    /// operand may be shared by several consumers.
    ///
    /// # Errors
    /// Returns `ScalarustError::ArityMismatch` if `out` does not have
    /// `arity()` operands.
    fn backward(&self, out: &Node) -> Result<(), ScalarustError>;
}
