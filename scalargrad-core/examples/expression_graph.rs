//! Builds a small expression, runs the backward pass and prints the graph.
//!
//! Run with `RUST_LOG=debug` to see the traversal logs. The DOT output can be
//! piped into `dot -Tpng` to draw the graph.

use scalargrad_core::num_traits::Pow;
use scalargrad_core::Graph;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("--- Forward ---");
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = ((a * b)? + a.pow(2.0)?)?;
    println!("c = a * b + a^2 = {}", c.value());

    println!("--- Backward ---");
    c.backward();
    println!("a : {}", a);
    println!("b : {}", b);
    println!("c : {}", c);

    println!("--- Reflected operators ---");
    let x = graph.leaf(2.0);
    let y = (5.0 - x)?;
    let z = Pow::pow(2.0, x)?;
    println!("5 - x = {}, 2 ^ x = {}", y.value(), z.value());

    println!("--- Domain errors ---");
    match graph.leaf(-1.0).ln() {
        Ok(node) => println!("unexpected value {}", node.value()),
        Err(err) => println!("ln(-1) rejected: {}", err),
    }

    println!("--- Graphviz ---");
    c.render().write_dot(&mut std::io::stdout())?;

    Ok(())
}
