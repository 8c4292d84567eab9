// src/node/traits.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::Node;
use crate::ops::arithmetic::{
    add_op, div_op, mul_op, pow_node_op, pow_op, rdiv_op, rpow_op, rsub_op, sub_op,
};
use num_traits::{Pow, ToPrimitive};
use std::ops::{Add, Div, Mul, Sub};

// --- Scalar coercion ---

/// Raw numeric input that can be wrapped into a leaf node.
///
/// Implemented for the primitive numeric types and for numeric sequences,
/// which must hold exactly one element.
pub trait AsScalar {
    fn as_scalar(&self) -> Result<f64, ScalarGradError>;
}

macro_rules! impl_as_scalar {
    ($($t:ty),*) => {
        $(
            impl AsScalar for $t {
                fn as_scalar(&self) -> Result<f64, ScalarGradError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_as_scalar!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

fn single_element<T: ToPrimitive>(values: &[T]) -> Result<f64, ScalarGradError> {
    match values {
        [only] => only.to_f64().ok_or_else(|| {
            ScalarGradError::InvalidScalar("element does not convert to f64".to_string())
        }),
        _ => Err(ScalarGradError::InvalidScalar(format!(
            "expected a sequence of length 1, got length {}",
            values.len()
        ))),
    }
}

impl<T: ToPrimitive> AsScalar for &[T] {
    fn as_scalar(&self) -> Result<f64, ScalarGradError> {
        single_element(self)
    }
}

impl<T: ToPrimitive> AsScalar for Vec<T> {
    fn as_scalar(&self) -> Result<f64, ScalarGradError> {
        single_element(self)
    }
}

impl<T: ToPrimitive, const N: usize> AsScalar for [T; N] {
    fn as_scalar(&self) -> Result<f64, ScalarGradError> {
        single_element(self)
    }
}

/// Operand accepted by the graph-building operations: an existing node or a raw
/// scalar that gets coerced into a fresh leaf of the target graph.
pub trait IntoNode<'g> {
    fn into_node(self, graph: &'g Graph) -> Result<Node<'g>, ScalarGradError>;
}

impl<'g> IntoNode<'g> for Node<'g> {
    fn into_node(self, graph: &'g Graph) -> Result<Node<'g>, ScalarGradError> {
        if std::ptr::eq(self.graph, graph) {
            Ok(self)
        } else {
            Err(ScalarGradError::GraphMismatch {
                operation: "into_node".to_string(),
            })
        }
    }
}

impl<'g> IntoNode<'g> for &Node<'g> {
    fn into_node(self, graph: &'g Graph) -> Result<Node<'g>, ScalarGradError> {
        (*self).into_node(graph)
    }
}

impl<'g, S: AsScalar> IntoNode<'g> for S {
    fn into_node(self, graph: &'g Graph) -> Result<Node<'g>, ScalarGradError> {
        graph.scalar(self)
    }
}

/// Anything whose forward value can be compared by [`Node::value_eq`].
pub trait CompareValue {
    fn compared_value(&self) -> Option<f64>;
}

impl<'g> CompareValue for Node<'g> {
    fn compared_value(&self) -> Option<f64> {
        Some(self.value())
    }
}

impl<'a, 'g> CompareValue for &'a Node<'g> {
    fn compared_value(&self) -> Option<f64> {
        Some(self.value())
    }
}

impl<S: AsScalar> CompareValue for S {
    fn compared_value(&self) -> Option<f64> {
        self.as_scalar().ok()
    }
}

// --- Operator overloads ---
//
// Every operation can fail (domain checks, graph mismatch), so the operators
// yield `Result<Node, ScalarGradError>` and compose with `?`:
// `let c = ((a * b)? + a.pow(2.0)?)?;`

impl<'g, R: IntoNode<'g>> Add<R> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn add(self, rhs: R) -> Self::Output {
        add_op(self, rhs)
    }
}

impl<'g, R: IntoNode<'g>> Sub<R> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn sub(self, rhs: R) -> Self::Output {
        sub_op(self, rhs)
    }
}

impl<'g, R: IntoNode<'g>> Mul<R> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn mul(self, rhs: R) -> Self::Output {
        mul_op(self, rhs)
    }
}

impl<'g, R: IntoNode<'g>> Div<R> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn div(self, rhs: R) -> Self::Output {
        div_op(self, rhs)
    }
}

impl<'g> Pow<f64> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn pow(self, exponent: f64) -> Self::Output {
        pow_op(self, exponent)
    }
}

impl<'g> Pow<Node<'g>> for Node<'g> {
    type Output = Result<Node<'g>, ScalarGradError>;

    fn pow(self, exponent: Node<'g>) -> Self::Output {
        pow_node_op(self, exponent)
    }
}

// Reflected forms (`scalar OP node`). Add and mul commute, so the operands are
// swapped. Sub, div and pow rebuild `leaf(scalar) OP node` to keep the operand
// order of the underlying formula.
//
// Only the literal fallback types get these impls: with both `f32` and `f64`
// (or `i32` and `i64`) a bare literal in `5.0 - x` has no single type.
macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {
        $(
            impl<'g> Add<Node<'g>> for $t {
                type Output = Result<Node<'g>, ScalarGradError>;

                fn add(self, rhs: Node<'g>) -> Self::Output {
                    add_op(rhs, self)
                }
            }

            impl<'g> Sub<Node<'g>> for $t {
                type Output = Result<Node<'g>, ScalarGradError>;

                fn sub(self, rhs: Node<'g>) -> Self::Output {
                    rsub_op(self, rhs)
                }
            }

            impl<'g> Mul<Node<'g>> for $t {
                type Output = Result<Node<'g>, ScalarGradError>;

                fn mul(self, rhs: Node<'g>) -> Self::Output {
                    mul_op(rhs, self)
                }
            }

            impl<'g> Div<Node<'g>> for $t {
                type Output = Result<Node<'g>, ScalarGradError>;

                fn div(self, rhs: Node<'g>) -> Self::Output {
                    rdiv_op(self, rhs)
                }
            }

            impl<'g> Pow<Node<'g>> for $t {
                type Output = Result<Node<'g>, ScalarGradError>;

                fn pow(self, rhs: Node<'g>) -> Self::Output {
                    rpow_op(self, rhs)
                }
            }
        )*
    };
}

impl_reflected_ops!(f64, i32);
