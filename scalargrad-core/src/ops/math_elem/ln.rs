// scalargrad-core/src/ops/math_elem/ln.rs

use crate::error::ScalarGradError;
use crate::node::Node;
use crate::ops::apply_unary_op;
use crate::types::OperatorTag;

/// Computes the natural logarithm (base \( e \)) of a node, creating a `Log` node.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the operand is not strictly
/// positive (zero, negative or NaN).
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers. Instead of
/// producing `-inf`/`NaN` and letting it poison every gradient downstream, the
/// operation is rejected when the node is built.
pub fn ln_op(a: Node<'_>) -> Result<Node<'_>, ScalarGradError> {
    apply_unary_op(a, OperatorTag::Log, |x| {
        if x <= 0.0 || x.is_nan() {
            return Err(ScalarGradError::domain(
                "ln_op",
                x,
                "logarithm of a non-positive value",
            ));
        }
        Ok(x.ln())
    })
}

/// Local derivative of \( \ln(a) \): \( 1 / a \).
pub(crate) fn ln_local_grads(a: f64) -> [f64; 2] {
    [1.0 / a, 0.0]
}

impl<'g> Node<'g> {
    /// Natural logarithm of this node, see [`ln_op`].
    pub fn ln(self) -> Result<Node<'g>, ScalarGradError> {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests; // Link to the test file
