use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::types::OperatorTag;

#[test]
fn test_copies_share_the_vertex() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let alias = a;
    let b = (alias * 2.0)?;
    b.backward();

    assert!(alias.same_node(&a));
    assert_eq!(a.gradient(), 2.0);
    assert_eq!(alias.gradient(), 2.0);
    Ok(())
}

#[test]
fn test_children_in_argument_order() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(4.0);
    let c = (b - a)?;

    let children = c.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].same_node(&b));
    assert!(children[1].same_node(&a));
    assert_eq!(c.op(), OperatorTag::Sub);
    assert!(!c.is_leaf());
    assert!(a.is_leaf());
    Ok(())
}

#[test]
fn test_value_eq_ignores_identity() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(3.0);
    let c = graph.leaf(4.0);

    assert!(a.value_eq(b));
    assert!(a.value_eq(&b));
    assert!(!a.same_node(&b));
    assert!(!a.value_eq(c));

    assert!(a.value_eq(3));
    assert!(a.value_eq(3.0f32));
    assert!(a.value_eq(vec![3.0]));
    assert!(!a.value_eq(vec![3.0, 3.0]));
    Ok(())
}

#[test]
fn test_value_eq_across_graphs() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.leaf(1.5);
    let b = g2.leaf(1.5);
    assert!(a.value_eq(b));
    assert!(!a.same_node(&b));
    // Same index, different graph
    assert_eq!(a.id(), b.id());
}

#[test]
fn test_display_summary() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = ((a * b)? + a.pow(2.0)?)?;
    c.backward();

    assert_eq!(
        format!("{}", c),
        "Op: add, Val: 10.00000, children: 2, grad: 1.00000"
    );
    assert_eq!(
        format!("{}", a),
        "Op: assign, Val: 2.00000, children: 0, grad: 7.00000"
    );
    Ok(())
}

#[test]
fn test_debug_lists_fields() {
    let graph = Graph::new();
    let a = graph.leaf(0.5);
    let debug = format!("{:?}", a);
    assert!(debug.starts_with("Node"));
    assert!(debug.contains("Assign"));
    assert!(debug.contains("0.5"));
}

#[test]
fn test_topological_order_of_chain() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = x.ln()?;
    let z = (y * 3.0)?;

    let order = z.topological_order(false);
    assert!(order.edges.is_none());
    assert_eq!(order.nodes.len(), 4);
    assert!(order.nodes[0].same_node(&x));
    assert!(order.nodes[1].same_node(&y));
    assert!(order.nodes[3].same_node(&z));
    Ok(())
}

#[test]
fn test_backward_on_leaf() {
    let graph = Graph::new();
    let a = graph.leaf(8.0);
    a.backward();
    assert_eq!(a.gradient(), 1.0);
}
