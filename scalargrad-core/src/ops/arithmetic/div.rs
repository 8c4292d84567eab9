// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::ops::apply_binary_op;
use crate::types::OperatorTag;

/// Divides `a` by `b`, creating a `Div` node.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the divisor is zero. The engine
/// never lets an infinite or NaN forward value into the graph from a division.
pub fn div_op<'g, R: IntoNode<'g>>(a: Node<'g>, b: R) -> Result<Node<'g>, ScalarGradError> {
    apply_binary_op(
        a,
        b,
        OperatorTag::Div,
        |a, b| {
            if b == 0.0 {
                return Err(ScalarGradError::domain("div_op", b, "division by zero"));
            }
            Ok(a / b)
        },
        "div_op",
    )
}

/// Reflected division `a / b` where `a` is the raw (left) operand.
///
/// Builds `leaf(a) / b`; swapping operands would compute the reciprocal.
pub fn rdiv_op<'g, L: IntoNode<'g>>(a: L, b: Node<'g>) -> Result<Node<'g>, ScalarGradError> {
    let a = a.into_node(b.graph)?;
    div_op(a, b)
}

/// Local derivatives of `a / b`: `1 / b` and `-a / b^2`.
pub(crate) fn div_local_grads(a: f64, b: f64) -> [f64; 2] {
    [1.0 / b, -a / (b * b)]
}

impl<'g> Node<'g> {
    /// Computes `other / self`, see [`rdiv_op`].
    pub fn rdiv<L: IntoNode<'g>>(self, other: L) -> Result<Node<'g>, ScalarGradError> {
        rdiv_op(other, self)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
