// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::ops::apply_binary_op;
use crate::types::OperatorTag;

/// Multiplies two operands, creating a `Mul` node.
///
/// Multiplication commutes, so `scalar * node` is served by swapping operands.
pub fn mul_op<'g, R: IntoNode<'g>>(a: Node<'g>, b: R) -> Result<Node<'g>, ScalarGradError> {
    apply_binary_op(a, b, OperatorTag::Mul, |a, b| Ok(a * b), "mul_op")
}

/// Local derivatives of `a * b`: each operand gets the value of the other.
pub(crate) fn mul_local_grads(a: f64, b: f64) -> [f64; 2] {
    [b, a]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
