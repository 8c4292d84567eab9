//! # scalargrad-data
//!
//! Point datasets and the geometric-median problem used to exercise
//! `scalargrad-core`: seeded point generation, the mean distance loss, its
//! gradient computed three ways (closed form, forward difference, autograd)
//! and a gradient descent driver recording its history.

pub mod dataset;
pub mod descent;
pub mod error;
pub mod loss;
pub mod points;

// Re-export main components
pub use dataset::Dataset;
pub use descent::{gradient_descent, DescentConfig, DescentHistory, GradientMode};
pub use error::DataError;
pub use loss::{
    closed_form_gradient, distance_loss, engine_gradient, forward_difference_gradient,
    mean_distance,
};
pub use points::{PointGenerator, PointSet, DEFAULT_SEED};
