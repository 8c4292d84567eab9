//! Graphviz rendering of a computation graph.
//!
//! Purely presentational: building a [`DotGraph`] reads values and gradients
//! but never mutates a node.

use crate::node::Node;
use crate::node_data::NodeId;
use std::fmt;
use std::io::Write;

/// A vertex of the rendered graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DotNode {
    pub id: NodeId,
    /// Multi-line label: position, operator, value and gradient (2 decimals).
    pub label: String,
}

/// Directed graph ready to be written as Graphviz DOT.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGraph {
    /// Root first, then the remaining nodes in reverse topological order.
    pub nodes: Vec<DotNode>,
    /// `(child, parent)` edges in traversal order.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl DotGraph {
    /// Write graphviz dot file to the given writer.
    pub fn write_dot(&self, writer: &mut impl Write) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        writeln!(f, "    rankdir=\"TB\";")?;
        for node in &self.nodes {
            writeln!(f, "    {} [label=\"{}\"];", node.id, node.label)?;
        }
        for (child, parent) in &self.edges {
            writeln!(f, "    {} -> {};", child, parent)?;
        }
        writeln!(f, "}}")
    }
}

impl<'g> Node<'g> {
    /// Renderable view of the graph this node depends on.
    ///
    /// Labels read `Op: <i> : <op>`, `Val : <value>`, `Grad : <gradient>` on three
    /// lines, where `<i>` counts from the root.
    pub fn render(&self) -> DotGraph {
        let sorted = self.topological_order(true);
        let nodes = sorted
            .nodes
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, node)| DotNode {
                id: node.id(),
                label: format!(
                    "Op: {} : {}\\nVal : {:.2}\\nGrad : {:.2}",
                    idx,
                    node.op(),
                    node.value(),
                    node.gradient()
                ),
            })
            .collect();
        let edges = sorted
            .edges
            .unwrap_or_default()
            .iter()
            .map(|edge| (edge.child.id(), edge.parent.id()))
            .collect();
        DotGraph { nodes, edges }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
