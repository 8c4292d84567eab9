use scalargrad_core::num_traits::Pow;
use scalargrad_core::{Graph, Node, ScalarGradError};

// Shared by several integration test binaries; not every binary uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `a * b + a^2 + ln(b)` on the given leaves.
#[allow(dead_code)]
pub fn mixed_expression<'g>(a: Node<'g>, b: Node<'g>) -> Result<Node<'g>, ScalarGradError> {
    let ab = (a * b)?;
    let a2 = a.pow(2.0)?;
    let lb = b.ln()?;
    (ab + a2)? + lb
}

/// Creates one leaf per value.
#[allow(dead_code)]
pub fn leaves<'g>(graph: &'g Graph, values: &[f64]) -> Vec<Node<'g>> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Composition touching every operator, including the reflected forms.
/// All three inputs must be strictly positive.
#[allow(dead_code)]
pub fn all_operators_expression<'g>(
    a: Node<'g>,
    b: Node<'g>,
    c: Node<'g>,
) -> Result<Node<'g>, ScalarGradError> {
    let quotient = ((a - b)? / c)?; // sub, div
    let shifted = (2.0 - a)?; // reflected sub
    let inverse = (1.0 / b)?; // reflected div
    let exp2 = Pow::pow(2.0, c)?; // reflected pow
    let power = a.pow_node(b)?; // node exponent
    let log_cube = (b.ln()? * c.pow(3.0)?)?; // ln, scalar exponent
    let offset = ((3.0 + a)? + (2.0 * b)?)?; // reflected add, reflected mul

    let left = ((quotient * shifted)? + (inverse * exp2)?)?;
    let right = ((power + log_cube)? + offset)?;
    left + right
}
