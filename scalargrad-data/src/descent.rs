// scalargrad-data/src/descent.rs

use crate::error::DataError;
use crate::loss::{closed_form_gradient, engine_gradient, forward_difference_gradient, mean_distance};
use crate::points::PointSet;

/// Hyperparameters of [`gradient_descent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentConfig {
    /// Number of update steps.
    pub epochs: usize,
    pub learning_rate: f64,
    /// Step `h` of the forward-difference gradient. Ignored by the other modes.
    pub step: f64,
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig {
            epochs: 1000,
            learning_rate: 0.01,
            step: 0.001,
        }
    }
}

/// Source of the gradient used at each descent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientMode {
    /// [`closed_form_gradient`]
    ClosedForm,
    /// [`forward_difference_gradient`] with [`DescentConfig::step`]
    ForwardDifference,
    /// [`engine_gradient`], i.e. the autograd engine on the graph-built loss.
    Autograd,
}

/// Per-epoch record of a descent run.
///
/// `losses`, `dl_dx` and `dl_dy` hold one entry per epoch, measured before
/// the update. `xs` and `ys` hold the starting position followed by the
/// position after every update, so they are one entry longer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescentHistory {
    pub losses: Vec<f64>,
    pub dl_dx: Vec<f64>,
    pub dl_dy: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl DescentHistory {
    fn with_capacity(epochs: usize) -> Self {
        DescentHistory {
            losses: Vec::with_capacity(epochs),
            dl_dx: Vec::with_capacity(epochs),
            dl_dy: Vec::with_capacity(epochs),
            xs: Vec::with_capacity(epochs + 1),
            ys: Vec::with_capacity(epochs + 1),
        }
    }

    /// Last recorded position.
    pub fn final_point(&self) -> Option<(f64, f64)> {
        Some((*self.xs.last()?, *self.ys.last()?))
    }
}

fn gradient_at(
    point: (f64, f64),
    points: &PointSet,
    config: &DescentConfig,
    mode: GradientMode,
) -> Result<(f64, f64), DataError> {
    match mode {
        GradientMode::ClosedForm => closed_form_gradient(point, points),
        GradientMode::ForwardDifference => forward_difference_gradient(point, points, config.step),
        GradientMode::Autograd => engine_gradient(point, points),
    }
}

/// Moves `start` towards the minimiser of the mean distance to `points`
/// (the geometric median) with plain gradient descent.
///
/// # Errors
/// - `DataError::InvalidConfig` if the learning rate is not finite.
/// - Any error of the selected gradient source, e.g. when an iterate lands
///   exactly on a data point.
pub fn gradient_descent(
    start: (f64, f64),
    points: &PointSet,
    config: &DescentConfig,
    mode: GradientMode,
) -> Result<DescentHistory, DataError> {
    if !config.learning_rate.is_finite() {
        return Err(DataError::InvalidConfig(format!(
            "learning rate must be finite, got {}",
            config.learning_rate
        )));
    }
    log::debug!(
        "gradient_descent: {} epochs, lr={}, mode={:?}, {} points",
        config.epochs,
        config.learning_rate,
        mode,
        points.xs().len()
    );

    let mut history = DescentHistory::with_capacity(config.epochs);
    let (mut x, mut y) = start;
    history.xs.push(x);
    history.ys.push(y);

    for _ in 0..config.epochs {
        history.losses.push(mean_distance((x, y), points)?);
        let (dx, dy) = gradient_at((x, y), points, config, mode)?;
        history.dl_dx.push(dx);
        history.dl_dy.push(dy);

        x -= config.learning_rate * dx;
        y -= config.learning_rate * dy;
        history.xs.push(x);
        history.ys.push(y);
    }

    if let Some(last) = history.losses.last() {
        log::debug!("gradient_descent finished at ({}, {}), loss {}", x, y, last);
    }
    Ok(history)
}

#[cfg(test)]
#[path = "descent_test.rs"]
mod tests;
