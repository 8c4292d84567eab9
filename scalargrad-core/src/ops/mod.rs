//! # Graph-building operations (`ops`)
//!
//! Every supported operation lives in its own file and provides two things:
//!
//! - **An `_op` function** (e.g. `add_op`) that coerces raw scalars into leaves,
//!   checks the operation's domain, computes the forward value and appends the
//!   resulting node to the graph. The same function is exposed as a method on
//!   [`Node`] and through the `std::ops` operators.
//! - **A `*_local_grads` function** returning the local partial derivatives of the
//!   output with respect to each operand. The backward pass dispatches to these
//!   through the node's [`OperatorTag`]
//!   (see [`crate::autograd::backward_op`]).
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, sub, mul, div, pow (scalar and node exponent).
//! - [`math_elem`]: natural logarithm.

use crate::error::ScalarGradError;
use crate::node::{IntoNode, Node};
use crate::node_data::NodeData;
use crate::types::OperatorTag;

pub mod arithmetic;
pub mod math_elem;

/// Applies a binary operation and appends its result to `a`'s graph.
///
/// `b` is coerced into a node of the same graph first. `forward` receives both
/// operand values and either returns the output value or rejects the operands
/// with a `ScalarGradError` (domain checks).
pub(crate) fn apply_binary_op<'g, R, F>(
    a: Node<'g>,
    b: R,
    op: OperatorTag,
    forward: F,
    op_name: &str,
) -> Result<Node<'g>, ScalarGradError>
where
    R: IntoNode<'g>,
    F: FnOnce(f64, f64) -> Result<f64, ScalarGradError>,
{
    let graph = a.graph;
    let b = b.into_node(graph).map_err(|err| match err {
        ScalarGradError::GraphMismatch { .. } => ScalarGradError::GraphMismatch {
            operation: op_name.to_string(),
        },
        other => other,
    })?;

    let value = forward(a.value(), b.value())?;
    Ok(graph.push(NodeData::new(value, op, vec![a.id, b.id])))
}

/// Applies a unary operation and appends its result to `a`'s graph.
pub(crate) fn apply_unary_op<'g, F>(
    a: Node<'g>,
    op: OperatorTag,
    forward: F,
) -> Result<Node<'g>, ScalarGradError>
where
    F: FnOnce(f64) -> Result<f64, ScalarGradError>,
{
    let value = forward(a.value())?;
    Ok(a.graph.push(NodeData::new(value, op, vec![a.id])))
}
