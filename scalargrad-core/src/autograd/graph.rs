use crate::node_data::{NodeData, NodeId};
use std::collections::HashSet;

/// Result of a topological sort over the arena.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SortedIds {
    /// Every node reachable from the root, each one after all of its children.
    pub(crate) order: Vec<NodeId>,
    /// `(child, parent)` pairs in traversal order, when requested.
    pub(crate) edges: Option<Vec<(NodeId, NodeId)>>,
}

/// Depth-first post-order traversal from `root`.
///
/// Children are expanded in argument order and a node is appended only after all
/// of its children. Membership in the visited set is keyed by [`NodeId`], so two
/// distinct nodes holding equal values are both visited, while a node reachable
/// through several paths is visited once.
///
/// With `collect_edges`, every `(child, parent)` pair is recorded at the moment
/// the parent expands that child, including children that were already visited.
///
/// The walk uses an explicit stack rather than recursion so long expression chains
/// cannot overflow the call stack; the produced order is the one of the recursive
/// formulation.
pub(crate) fn topological_sort(nodes: &[NodeData], root: NodeId, collect_edges: bool) -> SortedIds {
    let mut order = Vec::new();
    let mut edges = if collect_edges { Some(Vec::new()) } else { None };
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, index of the next child to expand)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    visited.insert(root);
    stack.push((root, 0));

    while let Some(frame) = stack.last_mut() {
        let (id, next_child) = *frame;
        let children = &nodes[id.0].children;

        if next_child < children.len() {
            frame.1 += 1;
            let child = children[next_child];
            if let Some(edges) = edges.as_mut() {
                edges.push((child, id));
            }
            if visited.insert(child) {
                stack.push((child, 0));
            }
        } else {
            stack.pop();
            order.push(id);
        }
    }

    log::trace!(
        "topological_sort from {}: {} nodes, collect_edges={}",
        root,
        order.len(),
        collect_edges
    );
    SortedIds { order, edges }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
