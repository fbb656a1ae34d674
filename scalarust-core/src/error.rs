use crate::ops::Operation;
use thiserror::Error;

/// Custom error type for the scalarust engine.
///
/// Arithmetic edge cases (NaN, infinities, modulo by zero) are not errors: they
/// propagate through node values. Errors are reserved for graphs whose structure
/// is inconsistent.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarustError {
    #[error("Operation '{operation}' expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
}
