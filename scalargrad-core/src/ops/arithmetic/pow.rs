// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_binary_op, apply_unary_op};
use crate::types::OperatorTag;

/// Raises `base` to a constant scalar `exponent`, creating a `Pow` node.
///
/// The exponent is not part of the graph: no gradient flows into it.
///
/// # Errors
/// - `ScalarGradError::InvalidExponent` if `exponent` is NaN or infinite.
/// - `ScalarGradError::DomainError` for a negative base with a non-integer
///   exponent, or a zero base with a negative exponent.
///
/// # Domain Considerations
/// For a zero base and `0 < exponent < 1` the forward value is `0` but the local
/// derivative `k * 0^(k-1)` is infinite, so the gradient reaching the base is
/// infinite as well.
pub fn pow_op(base: Node<'_>, exponent: f64) -> Result<Node<'_>, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    apply_unary_op(base, OperatorTag::Pow { exponent }, |a| {
        if a < 0.0 && exponent.fract() != 0.0 {
            return Err(ScalarGradError::domain(
                "pow_op",
                a,
                "negative base with a non-integer exponent",
            ));
        }
        if a == 0.0 && exponent < 0.0 {
            return Err(ScalarGradError::domain(
                "pow_op",
                a,
                "zero base with a negative exponent",
            ));
        }
        Ok(a.powf(exponent))
    })
}

/// Raises `base` to the power of another node, creating a `PowNode` node.
///
/// Gradients flow into both the base and the exponent.
///
/// # Errors
/// - `ScalarGradError::DomainError` if the base is not strictly positive, since
///   the derivative with respect to the exponent needs `ln(base)`.
/// - `ScalarGradError::InvalidExponent` if the exponent's value is not finite.
pub fn pow_node_op<'g, R: IntoNode<'g>>(
    base: Node<'g>,
    exponent: R,
) -> Result<Node<'g>, ScalarGradError> {
    apply_binary_op(
        base,
        exponent,
        OperatorTag::PowNode,
        |a, b| {
            if !b.is_finite() {
                return Err(ScalarGradError::InvalidExponent { exponent: b });
            }
            if a <= 0.0 || a.is_nan() {
                return Err(ScalarGradError::domain(
                    "pow_node_op",
                    a,
                    "base must be positive when the exponent is a node",
                ));
            }
            Ok(a.powf(b))
        },
        "pow_node_op",
    )
}

/// Reflected power `base ^ exponent` where `base` is the raw (left) operand.
///
/// Builds `leaf(base) ^ exponent` with the exponent as a node. Treating it as
/// `exponent ^ base` would silently compute a different function.
pub fn rpow_op<'g, L: IntoNode<'g>>(
    base: L,
    exponent: Node<'g>,
) -> Result<Node<'g>, ScalarGradError> {
    let base = base.into_node(exponent.graph)?;
    pow_node_op(base, exponent)
}

/// Local derivative of `a ^ k` with respect to `a`: `k * a^(k-1)`.
///
/// `a ^ 0` is constant, so its derivative is `0` everywhere, including at
/// `a = 0` where the general formula evaluates `0 * inf`.
pub(crate) fn pow_local_grads(a: f64, exponent: f64) -> [f64; 2] {
    if exponent == 0.0 {
        return [0.0, 0.0];
    }
    [exponent * a.powf(exponent - 1.0), 0.0]
}

/// Local derivatives of `a ^ b` with both operands in the graph:
/// `b * a^(b-1)` and `a^b * ln(a)`.
pub(crate) fn pow_node_local_grads(a: f64, b: f64, output: f64) -> [f64; 2] {
    [b * a.powf(b - 1.0), output * a.ln()]
}

impl<'g> Node<'g> {
    /// Raises this node to a constant exponent, see [`pow_op`].
    pub fn pow(self, exponent: f64) -> Result<Node<'g>, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this node to the power of `exponent`, which becomes part of the
    /// graph. See [`pow_node_op`].
    pub fn pow_node<R: IntoNode<'g>>(self, exponent: R) -> Result<Node<'g>, ScalarGradError> {
        pow_node_op(self, exponent)
    }

    /// Computes `base ^ self`, see [`rpow_op`].
    pub fn rpow<L: IntoNode<'g>>(self, base: L) -> Result<Node<'g>, ScalarGradError> {
        rpow_op(base, self)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
