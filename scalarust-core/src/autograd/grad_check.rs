use crate::error::ScalarustError;
use crate::node::Node;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Backward pass execution failed during gradient check: {0}")]
    Backward(#[from] ScalarustError),
}

/// Step size and tolerances used by [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step.
    pub epsilon: f64,
    /// Absolute tolerance between analytical and numerical gradients.
    pub abs_tolerance: f64,
    /// Relative tolerance between analytical and numerical gradients.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a graph from leaf nodes (one per entry of `inputs`, same order)
/// and returns its output. The graph is built once to obtain analytical
/// gradients through the backward pass, then twice more per input at
/// `x + epsilon` and `x - epsilon` to estimate the numerical gradient.
///
/// Comparisons and `relu` have straight-through or kinked gradients; keep
/// inputs away from their switching points.
///
/// # Errors
/// - `GradientMismatch` if the two gradients differ beyond both tolerances.
/// - `NumericalGradNaNOrInfinite` / `AnalyticalGradNaNOrInfinite` if either is
///   not finite.
/// - `Backward` if the backward pass fails.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Node,
{
    let build = |values: &[f64]| -> (Vec<Node>, Node) {
        let leaves: Vec<Node> = values.iter().map(|&v| Node::new(v)).collect();
        let output = func(leaves.as_slice());
        (leaves, output)
    };

    // --- 1. Analytical gradients ---
    let (leaves, output) = build(inputs);
    output.backward()?;

    // --- 2. Numerical gradients, one input at a time ---
    let mut perturbed = inputs.to_vec();
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let original = inputs[input_index];
        perturbed[input_index] = original + config.epsilon;
        let loss_plus = build(perturbed.as_slice()).1.value();
        perturbed[input_index] = original - config.epsilon;
        let loss_minus = build(perturbed.as_slice()).1.value();
        perturbed[input_index] = original;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        debug!(
            "check_grad: input {} ok (analytical {}, numerical {})",
            input_index, analytical_grad, numerical_grad
        );
    }

    Ok(())
}
