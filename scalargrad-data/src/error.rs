use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Errors raised by the point datasets, losses and gradient descent.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DataError {
    #[error("Point set is empty: the loss is undefined without data points")]
    EmptyPointSet,

    #[error("Coordinate length mismatch: {xs} x values but {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("Index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The distance loss is not differentiable where the query point
    /// coincides with a data point.
    #[error("Gradient undefined: query point coincides with data point {index}")]
    UndefinedGradient { index: usize },

    #[error("Invalid descent configuration: {0}")]
    InvalidConfig(String),

    #[error("Autograd engine error: {0}")]
    Engine(#[from] ScalarGradError),
}
