//! Reverse-mode machinery: traversal order, backward dispatch and numerical
//! verification of the analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, numerical_gradient, GradCheckConfig, GradCheckError};
