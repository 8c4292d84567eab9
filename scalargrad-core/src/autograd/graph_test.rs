use super::*;
use crate::error::ScalarGradError;
use crate::graph::Graph;

fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().map(|&i| NodeId(i)).collect()
}

#[test]
fn test_sort_single_leaf() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let sorted = topological_sort(&graph.nodes(), a.id(), true);
    assert_eq!(sorted.order, ids(&[0]));
    assert_eq!(sorted.edges, Some(Vec::new()));
}

#[test]
fn test_sort_diamond_visits_shared_child_once() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0); // n0
    let b = a.ln()?; // n1
    let c = a.pow(2.0)?; // n2
    let d = (b + c)?; // n3

    let sorted = topological_sort(&graph.nodes(), d.id(), true);
    assert_eq!(sorted.order, ids(&[0, 1, 2, 3]));
    // The edge into the already visited leaf is still recorded
    assert_eq!(
        sorted.edges,
        Some(vec![
            (NodeId(1), NodeId(3)),
            (NodeId(0), NodeId(1)),
            (NodeId(2), NodeId(3)),
            (NodeId(0), NodeId(2)),
        ])
    );
    Ok(())
}

#[test]
fn test_sort_repeated_operand() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    let y = (x * x)?;

    let sorted = topological_sort(&graph.nodes(), y.id(), true);
    assert_eq!(sorted.order, ids(&[0, 1]));
    assert_eq!(
        sorted.edges,
        Some(vec![(NodeId(0), NodeId(1)), (NodeId(0), NodeId(1))])
    );
    Ok(())
}

#[test]
fn test_sort_keys_on_identity_not_value() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(3.0);
    let c = (a + b)?;

    let sorted = topological_sort(&graph.nodes(), c.id(), false);
    assert_eq!(sorted.order, ids(&[0, 1, 2]));
    assert!(sorted.edges.is_none());
    Ok(())
}

#[test]
fn test_sort_ignores_unreachable_nodes() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let _unused = graph.leaf(5.0);
    let b = (a * 4.0)?; // leaf 4.0 is n2, product is n3

    let sorted = topological_sort(&graph.nodes(), b.id(), false);
    assert_eq!(sorted.order, ids(&[0, 2, 3]));
    Ok(())
}

#[test]
fn test_sort_long_chain_does_not_overflow() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let x = graph.leaf(1.0);
    let mut acc = x;
    for _ in 0..50_000 {
        acc = (acc + x)?;
    }

    let sorted = topological_sort(&graph.nodes(), acc.id(), false);
    assert_eq!(sorted.order.len(), 50_001);
    assert_eq!(sorted.order[0], x.id());
    assert_eq!(*sorted.order.last().unwrap(), acc.id());
    Ok(())
}
