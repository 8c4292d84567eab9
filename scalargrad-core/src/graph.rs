// src/graph.rs
use crate::error::ScalarGradError;
use crate::node::{AsScalar, Node};
use crate::node_data::{NodeData, NodeId};
use std::cell::{Ref, RefCell, RefMut};

/// Arena owning every node of one computation graph.
///
/// Nodes are appended as operations are applied and refer to their operands by
/// [`NodeId`]. A node can only point at nodes that already exist, so the graph is
/// acyclic by construction. All nodes are released together when the `Graph` is
/// dropped.
///
/// # Threading
///
/// A `Graph` is single-threaded. Gradients are mutated in place by exactly one
/// backward pass at a time; the interior `RefCell` makes the type `!Sync`, so
/// sharing a graph across threads (and thus running concurrent backward passes
/// over it) is rejected at compile time.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node (`Assign` tag, no children) holding `value`.
    pub fn leaf(&self, value: f64) -> Node<'_> {
        self.push(NodeData::leaf(value))
    }

    /// Coerces a raw numeric input into a leaf node.
    ///
    /// Accepts any primitive number or a numeric sequence of length exactly one.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidScalar` if the input is a sequence of any
    /// other length or does not convert to `f64`.
    pub fn scalar<S: AsScalar>(&self, input: S) -> Result<Node<'_>, ScalarGradError> {
        Ok(self.leaf(input.as_scalar()?))
    }

    /// Number of nodes created in this graph so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph to zero.
    ///
    /// The backward pass never does this on its own: running `backward()` twice
    /// without calling `zero_grad()` in between accumulates twice.
    pub fn zero_grad(&self) {
        let mut nodes = self.nodes_mut();
        log::debug!("zero_grad() resetting {} nodes", nodes.len());
        for node in nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Returns the handle at arena position `id`, or `None` if it is out of
    /// bounds.
    ///
    /// This is a bounds check only: `NodeId`s do not record their graph, so an
    /// id issued by another graph that happens to be in range still yields a
    /// handle (to this graph's node at that position).
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        if id.0 < self.len() {
            Some(Node { graph: self, id })
        } else {
            None
        }
    }

    pub(crate) fn push(&self, data: NodeData) -> Node<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(data);
        Node { graph: self, id }
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<NodeData>> {
        self.nodes.borrow_mut()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
