use crate::node::Node;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with both values otherwise.
pub fn check_value_near(actual: &Node<'_>, expected: f64, tolerance: f64) {
    let value = actual.value();
    let diff = (value - expected).abs();
    if diff > tolerance || diff.is_nan() {
        panic!(
            "Value mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            value,
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks the gradient accumulators of `nodes` against `expected`, pairwise.
/// Panics on a length mismatch or on the first gradient outside `tolerance`.
pub fn check_grads_near(nodes: &[Node<'_>], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");

    for (i, (node, e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let grad = node.gradient();
        let diff = (grad - *e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.id(),
                grad,
                e,
                diff,
                tolerance
            );
        }
    }
}
