// src/node/debug.rs
use crate::node::Node;
use std::fmt;

/// Human-readable summary: operator tag, value, number of children and
/// current gradient, e.g. `Op: add, Val: 10.00000, children: 2, grad: 1.00000`.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let data = &nodes[self.id.0];
        write!(
            f,
            "Op: {}, Val: {:.5}, children: {}, grad: {:.5}",
            data.op,
            data.value,
            data.children.len(),
            data.grad
        )
    }
}

// Manual implementation of Debug trait
impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let data = &nodes[self.id.0];
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("op", &data.op)
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("children", &data.children)
            .finish()
    }
}
