// src/node/mod.rs

use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::types::OperatorTag;

mod autograd;
mod debug;
mod traits;

pub use autograd::{Edge, TopologicalOrder};
pub use traits::{AsScalar, CompareValue, IntoNode};

/// Handle to a vertex of a computation graph.
///
/// A `Node` is a cheap `Copy` pair of the owning [`Graph`] and the node's
/// [`NodeId`]. Copying a handle never copies the vertex: every copy refers to the
/// same value and the same gradient accumulator, which is what lets one
/// sub-expression feed several consumers.
///
/// `Node` deliberately implements neither `PartialEq` nor `Hash`. Compare values
/// with [`Node::value_eq`] and identities with [`Node::same_node`] or
/// [`Node::id`].
#[derive(Clone, Copy)]
pub struct Node<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
}

impl<'g> Node<'g> {
    /// Forward value computed when the node was created.
    pub fn value(&self) -> f64 {
        self.graph.nodes()[self.id.0].value
    }

    /// Current content of the gradient accumulator.
    pub fn gradient(&self) -> f64 {
        self.graph.nodes()[self.id.0].grad
    }

    /// Operation that produced this node.
    pub fn op(&self) -> OperatorTag {
        self.graph.nodes()[self.id.0].op
    }

    /// Operands of this node, in argument order.
    pub fn children(&self) -> Vec<Node<'g>> {
        self.graph.nodes()[self.id.0]
            .children
            .iter()
            .map(|&id| Node { graph: self.graph, id })
            .collect()
    }

    pub fn num_children(&self) -> usize {
        self.graph.nodes()[self.id.0].children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Identity of the node within its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this node belongs to.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Identity comparison: `true` only if both handles refer to the same vertex
    /// of the same graph. Values are ignored.
    pub fn same_node(&self, other: &Node<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }

    /// Numeric comparison of forward values only.
    ///
    /// `other` may be another node, a primitive number, or a length-one numeric
    /// sequence. Identity, gradient and graph shape are ignored, so two distinct
    /// leaves holding `3.0` are value-equal while remaining separate vertices.
    /// Inputs that cannot be read as a single number compare unequal.
    pub fn value_eq<V: CompareValue>(&self, other: V) -> bool {
        match other.compared_value() {
            Some(v) => self.value() == v,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
