use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::Node;
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and acceptance tolerance of [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied on each side of the input for the centered difference.
    pub epsilon: f64,
    /// Absolute or relative difference allowed between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Builds `func` on a fresh graph whose leaves hold `point` and returns the
/// forward value.
fn evaluate<F>(func: &F, point: &[f64]) -> Result<f64, ScalarGradError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Node<'_>> = point.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&graph, &leaves)?;
    Ok(output.value())
}

/// Evaluates `func` at `point ± epsilon·e_i` for every input `i` and returns the
/// `(loss_plus, loss_minus)` pairs in input order.
fn perturbed_losses<F>(func: &F, point: &[f64], epsilon: f64) -> Result<Vec<(f64, f64)>, ScalarGradError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    let mut perturbed = point.to_vec();
    let mut losses = Vec::with_capacity(point.len());

    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let loss_plus = evaluate(func, &perturbed)?;
        perturbed[i] = point[i] - epsilon;
        let loss_minus = evaluate(func, &perturbed)?;
        perturbed[i] = point[i];

        losses.push((loss_plus, loss_minus));
    }
    Ok(losses)
}

/// Centered finite-difference estimate of the gradient of `func` at `point`.
///
/// For every input `i`: `(f(x + eps·e_i) - f(x - eps·e_i)) / (2·eps)`. Each
/// evaluation builds its own graph, so no gradient state is touched.
pub fn numerical_gradient<F>(func: F, point: &[f64], epsilon: f64) -> Result<Vec<f64>, ScalarGradError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    let losses = perturbed_losses(&func, point, epsilon)?;
    Ok(losses
        .into_iter()
        .map(|(plus, minus)| (plus - minus) / (2.0 * epsilon))
        .collect())
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns
/// the scalar output. The analytical gradients come from a single `backward()`
/// on that output; the numerical ones from centered differences with
/// `config.epsilon`. Each pair must agree within `config.tolerance`, either in
/// absolute or in relative terms.
///
/// On success the analytical gradients are returned, in input order.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<Vec<f64>, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    if !(config.epsilon > 0.0 && config.tolerance >= 0.0) {
        return Err(GradCheckError::InvalidConfig(format!(
            "epsilon must be positive and tolerance non-negative, got {:?}",
            config
        )));
    }

    // --- 1. Forward and backward pass ---
    let analytical: Vec<f64> = {
        let graph = Graph::new();
        let leaves: Vec<Node<'_>> = inputs.iter().map(|&v| graph.leaf(v)).collect();
        let output = func(&graph, &leaves)?;
        output.backward();
        let grads: Vec<f64> = leaves.iter().map(|leaf| leaf.gradient()).collect();
        grads
    };

    // --- 2. Compare against centered differences ---
    let eps = config.epsilon;
    let tol = config.tolerance;
    let losses = perturbed_losses(&func, inputs, eps)?;

    for (i, (&analytical_grad, &(loss_plus, loss_minus))) in
        analytical.iter().zip(losses.iter()).enumerate()
    {
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * eps);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tol)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tol);
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad passed for {} inputs", inputs.len());
    Ok(analytical)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
