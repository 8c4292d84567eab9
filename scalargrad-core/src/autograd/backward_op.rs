// Backward rules, dispatched on the operator tag.

use crate::node_data::{NodeData, NodeId};
use crate::ops::arithmetic::{add, div, mul, pow, sub};
use crate::ops::math_elem::ln;
use crate::types::OperatorTag;

/// Local partial derivatives of a node's output with respect to each child.
///
/// `inputs` holds the children's forward values in argument order (unused slots
/// are zero) and `output` the node's own forward value. Entry `i` of the result
/// belongs to child `i`; entries past the node's arity are ignored.
pub(crate) fn local_gradients(op: OperatorTag, inputs: [f64; 2], output: f64) -> [f64; 2] {
    let [a, b] = inputs;
    match op {
        OperatorTag::Assign => [0.0, 0.0],
        OperatorTag::Add => add::add_local_grads(a, b),
        OperatorTag::Sub => sub::sub_local_grads(a, b),
        OperatorTag::Mul => mul::mul_local_grads(a, b),
        OperatorTag::Div => div::div_local_grads(a, b),
        OperatorTag::Pow { exponent } => pow::pow_local_grads(a, exponent),
        OperatorTag::Log => ln::ln_local_grads(a),
        OperatorTag::PowNode => pow::pow_node_local_grads(a, b, output),
    }
}

/// Runs the backward rule of node `id`.
///
/// Adds `grad(id) * local_derivative` into every child's accumulator; it never
/// overwrites. Leaves are a no-op. The caller must guarantee that every consumer
/// of `id` has already run, i.e. that `grad(id)` is final.
pub(crate) fn apply_backward_rule(nodes: &mut [NodeData], id: NodeId) {
    let node = &nodes[id.0];
    if node.op.is_leaf() {
        return;
    }

    let upstream = node.grad;
    let mut inputs = [0.0; 2];
    for (slot, child) in inputs.iter_mut().zip(node.children.iter()) {
        *slot = nodes[child.0].value;
    }
    let locals = local_gradients(node.op, inputs, node.value);

    for i in 0..nodes[id.0].children.len() {
        let child = nodes[id.0].children[i];
        nodes[child.0].grad += upstream * locals[i];
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
