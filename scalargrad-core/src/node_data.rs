// src/node_data.rs
use crate::types::OperatorTag;
use std::fmt;

/// Stable identity of a node inside its [`Graph`](crate::graph::Graph).
///
/// This is the arena index of the node. Two nodes holding the same value still
/// have different ids, which is what the traversal's visited set is keyed on.
/// Ids are only meaningful together with the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Internal storage for a single graph vertex.
///
/// `value` never changes after construction. `grad` is the accumulator the
/// backward pass adds into.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: OperatorTag,
    /// Operands in left-to-right argument order. Every id is smaller than the
    /// id of the node holding it, so the graph cannot contain cycles.
    pub(crate) children: Vec<NodeId>,
}

impl NodeData {
    pub(crate) fn leaf(value: f64) -> Self {
        NodeData {
            value,
            grad: 0.0,
            op: OperatorTag::Assign,
            children: Vec::new(),
        }
    }

    pub(crate) fn new(value: f64, op: OperatorTag, children: Vec<NodeId>) -> Self {
        debug_assert_eq!(op.arity(), children.len());
        NodeData {
            value,
            grad: 0.0,
            op,
            children,
        }
    }
}
