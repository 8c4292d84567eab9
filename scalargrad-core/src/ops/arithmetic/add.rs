// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::ops::apply_binary_op;
use crate::types::OperatorTag;

/// Adds two operands, creating an `Add` node.
///
/// `b` may be a node of the same graph or a raw scalar, which is coerced into a
/// leaf. Addition commutes, so `scalar + node` is served by swapping operands.
///
/// # Errors
/// `ScalarGradError::GraphMismatch` if `b` is a node of another graph, or
/// `ScalarGradError::InvalidScalar` if `b` cannot be coerced.
pub fn add_op<'g, R: IntoNode<'g>>(a: Node<'g>, b: R) -> Result<Node<'g>, ScalarGradError> {
    apply_binary_op(a, b, OperatorTag::Add, |a, b| Ok(a + b), "add_op")
}

/// Local derivatives of `a + b`: both operands receive the upstream gradient
/// unchanged.
pub(crate) fn add_local_grads(_a: f64, _b: f64) -> [f64; 2] {
    [1.0, 1.0]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
