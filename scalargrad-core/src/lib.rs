//! # scalargrad-core
//!
//! Scalar reverse-mode automatic differentiation. Arithmetic on [`Node`]s is
//! evaluated eagerly and recorded in a [`Graph`] arena; [`Node::backward`] then
//! fills every gradient accumulator the output depends on in one reverse pass.
//!
//! ```
//! use scalargrad_core::{Graph, ScalarGradError};
//!
//! # fn main() -> Result<(), ScalarGradError> {
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(3.0);
//! let c = ((a * b)? + a.pow(2.0)?)?;
//! assert_eq!(c.value(), 10.0);
//!
//! c.backward();
//! assert_eq!(a.gradient(), 7.0);
//! assert_eq!(b.gradient(), 2.0);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod node_data;
pub mod ops;
pub mod render;
pub mod types;
pub mod utils;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{AsScalar, CompareValue, Edge, IntoNode, Node, TopologicalOrder};
pub use node_data::NodeId;
pub use render::{DotGraph, DotNode};
pub use types::OperatorTag;
// Re-export traits required by public operators
pub use num_traits;
