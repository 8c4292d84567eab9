// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::ops::apply_binary_op;
use crate::types::OperatorTag;

/// Subtracts `b` from `a`, creating a `Sub` node.
///
/// # Errors
/// `ScalarGradError::GraphMismatch` if `b` is a node of another graph, or
/// `ScalarGradError::InvalidScalar` if `b` cannot be coerced.
pub fn sub_op<'g, R: IntoNode<'g>>(a: Node<'g>, b: R) -> Result<Node<'g>, ScalarGradError> {
    apply_binary_op(a, b, OperatorTag::Sub, |a, b| Ok(a - b), "sub_op")
}

/// Reflected subtraction `a - b` where `a` is the raw (left) operand.
///
/// `a` is turned into a leaf of `b`'s graph and the node is built as
/// `leaf(a) - b`, keeping the operand order of the formula. Swapping operands
/// instead would silently flip the sign.
pub fn rsub_op<'g, L: IntoNode<'g>>(a: L, b: Node<'g>) -> Result<Node<'g>, ScalarGradError> {
    let a = a.into_node(b.graph)?;
    sub_op(a, b)
}

/// Local derivatives of `a - b`.
pub(crate) fn sub_local_grads(_a: f64, _b: f64) -> [f64; 2] {
    [1.0, -1.0]
}

impl<'g> Node<'g> {
    /// Computes `other - self`, see [`rsub_op`].
    pub fn rsub<L: IntoNode<'g>>(self, other: L) -> Result<Node<'g>, ScalarGradError> {
        rsub_op(other, self)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
