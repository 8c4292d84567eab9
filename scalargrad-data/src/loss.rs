// scalargrad-data/src/loss.rs
//
// Mean euclidean distance from a query point to a point set, and three ways of
// computing its gradient: closed form, forward difference, and the autograd
// engine.

use crate::dataset::Dataset;
use crate::error::DataError;
use crate::points::PointSet;
use scalargrad_core::{Graph, Node};

fn ensure_not_empty(points: &PointSet) -> Result<(), DataError> {
    if points.is_empty() {
        return Err(DataError::EmptyPointSet);
    }
    Ok(())
}

/// `(1/n) Σ sqrt((x_i - x)² + (y_i - y)²)`
///
/// # Errors
/// `DataError::EmptyPointSet` if `points` is empty.
pub fn mean_distance(point: (f64, f64), points: &PointSet) -> Result<f64, DataError> {
    ensure_not_empty(points)?;
    let (x, y) = point;
    let total: f64 = points.iter().map(|(xi, yi)| (xi - x).hypot(yi - y)).sum();
    Ok(total / points.len() as f64)
}

/// Analytic gradient of [`mean_distance`] with respect to the query point:
/// `(-(1/n) Σ (x_i - x)/d_i, -(1/n) Σ (y_i - y)/d_i)`.
///
/// # Errors
/// - `DataError::EmptyPointSet` if `points` is empty.
/// - `DataError::UndefinedGradient` if the query point coincides with a data
///   point (`d_i == 0`).
pub fn closed_form_gradient(point: (f64, f64), points: &PointSet) -> Result<(f64, f64), DataError> {
    ensure_not_empty(points)?;
    let (x, y) = point;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (index, (xi, yi)) in points.iter().enumerate() {
        let dist = (xi - x).hypot(yi - y);
        if dist == 0.0 {
            return Err(DataError::UndefinedGradient { index });
        }
        sum_x += (xi - x) / dist;
        sum_y += (yi - y) / dist;
    }
    let n = points.len() as f64;
    Ok((-sum_x / n, -sum_y / n))
}

/// One-sided finite-difference estimate `(L(p + h·e) - L(p)) / h` along each
/// axis.
///
/// # Errors
/// `DataError::EmptyPointSet` if `points` is empty, `DataError::InvalidConfig`
/// if `step` is not a positive finite number.
pub fn forward_difference_gradient(
    point: (f64, f64),
    points: &PointSet,
    step: f64,
) -> Result<(f64, f64), DataError> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(DataError::InvalidConfig(format!(
            "finite-difference step must be positive, got {}",
            step
        )));
    }
    let (x, y) = point;
    let base = mean_distance(point, points)?;
    let dx = (mean_distance((x + step, y), points)? - base) / step;
    let dy = (mean_distance((x, y + step), points)? - base) / step;
    Ok((dx, dy))
}

/// Builds the mean distance loss as a computation graph over the query
/// coordinates `x` and `y`.
///
/// Each distance is expressed as `((x_i - x)^2 + (y_i - y)^2)^0.5`, so the
/// loss differentiates through the engine's `sub`, `pow`, `add` and `div`.
///
/// # Errors
/// `DataError::EmptyPointSet` if `points` is empty, or any engine error raised
/// while building the graph.
pub fn distance_loss<'g>(
    x: Node<'g>,
    y: Node<'g>,
    points: &PointSet,
) -> Result<Node<'g>, DataError> {
    ensure_not_empty(points)?;
    let mut total: Option<Node<'g>> = None;
    for (xi, yi) in points.iter() {
        let dx2 = (xi - x)?.pow(2.0)?;
        let dy2 = (yi - y)?.pow(2.0)?;
        let dist = (dx2 + dy2)?.pow(0.5)?;
        total = Some(match total {
            Some(acc) => (acc + dist)?,
            None => dist,
        });
    }
    let total = total.ok_or(DataError::EmptyPointSet)?;
    Ok((total / points.len())?)
}

/// Gradient of the distance loss computed by the autograd engine.
///
/// A fresh graph is built for every call, so gradients never accumulate across
/// calls.
///
/// # Errors
/// Same as [`closed_form_gradient`]. A coinciding data point is rejected before
/// the graph is built, since the engine would otherwise propagate `0 * inf`.
pub fn engine_gradient(point: (f64, f64), points: &PointSet) -> Result<(f64, f64), DataError> {
    ensure_not_empty(points)?;
    let (px, py) = point;
    if let Some(index) = points.iter().position(|(xi, yi)| xi == px && yi == py) {
        return Err(DataError::UndefinedGradient { index });
    }

    let graph = Graph::new();
    let x = graph.leaf(px);
    let y = graph.leaf(py);
    let loss = distance_loss(x, y, points)?;
    loss.backward();
    log::trace!(
        "engine_gradient: {} nodes for {} points",
        graph.len(),
        points.len()
    );
    Ok((x.gradient(), y.gradient()))
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
