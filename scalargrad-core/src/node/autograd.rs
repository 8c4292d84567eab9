// src/node/autograd.rs

use crate::autograd::backward_op::apply_backward_rule;
use crate::autograd::graph::topological_sort;
use crate::node::Node;

/// A `(child, parent)` dependency: `parent` was computed from `child`.
#[derive(Clone, Copy)]
pub struct Edge<'g> {
    pub child: Node<'g>,
    pub parent: Node<'g>,
}

/// Output of [`Node::topological_order`].
pub struct TopologicalOrder<'g> {
    /// Every node the root depends on (root included), each one after all of its
    /// children. Reverse it to get the order used by the backward pass.
    pub nodes: Vec<Node<'g>>,
    /// Dependency edges in traversal order, present only when requested.
    pub edges: Option<Vec<Edge<'g>>>,
}

impl<'g> Node<'g> {
    /// Deterministic depth-first post-order over everything this node depends on.
    ///
    /// Nodes are keyed by identity, so a vertex reachable through several paths
    /// appears once. With `collect_edges`, the `(child, parent)` edges are
    /// returned as well, for rendering.
    pub fn topological_order(&self, collect_edges: bool) -> TopologicalOrder<'g> {
        let sorted = topological_sort(&self.graph.nodes(), self.id, collect_edges);
        let graph = self.graph;
        TopologicalOrder {
            nodes: sorted
                .order
                .into_iter()
                .map(|id| Node { graph, id })
                .collect(),
            edges: sorted.edges.map(|edges| {
                edges
                    .into_iter()
                    .map(|(child, parent)| Edge {
                        child: Node { graph, id: child },
                        parent: Node { graph, id: parent },
                    })
                    .collect()
            }),
        }
    }

    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// The node's own gradient is set to `1.0`, then the backward rule of every
    /// reachable node runs exactly once, in reverse topological order, so a node's
    /// accumulator is final before its rule propagates it. Cost is
    /// O(vertices + edges).
    ///
    /// Gradients are accumulated, never reset: calling `backward()` a second time
    /// without [`Graph::zero_grad`](crate::graph::Graph::zero_grad) in between
    /// double-counts every contribution. That is a caller error and is not
    /// detected.
    pub fn backward(&self) {
        let sorted = topological_sort(&self.graph.nodes(), self.id, false);
        if self.is_leaf() {
            log::debug!("backward() called on a leaf node. Only its own gradient is seeded.");
        }

        let mut nodes = self.graph.nodes_mut();
        nodes[self.id.0].grad = 1.0;
        for &id in sorted.order.iter().rev() {
            apply_backward_rule(&mut nodes, id);
        }
        log::debug!("backward() from {} visited {} nodes", self.id, sorted.order.len());
    }
}
