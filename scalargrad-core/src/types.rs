use std::fmt;

/// Identifies the operation that produced a node.
///
/// The tag, together with the values of the node's children, is all the
/// backward pass needs: local derivatives are computed by a single dispatch
/// over this enum (see [`crate::autograd::backward_op`]) instead of storing a
/// closure per node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatorTag {
    /// Leaf node created from a raw scalar. No children.
    Assign,
    /// `children[0] + children[1]`
    Add,
    /// `children[0] - children[1]`
    Sub,
    /// `children[0] * children[1]`
    Mul,
    /// `children[0] / children[1]`
    Div,
    /// `children[0] ^ exponent`, with a constant scalar exponent.
    Pow { exponent: f64 },
    /// Natural logarithm of `children[0]`.
    Log,
    /// `children[0] ^ children[1]`, with the exponent itself a node.
    /// Produced by reflected powers such as `Pow::pow(2.0, x)`.
    PowNode,
}

impl OperatorTag {
    /// Number of children a node with this tag carries.
    pub fn arity(&self) -> usize {
        match self {
            OperatorTag::Assign => 0,
            OperatorTag::Pow { .. } | OperatorTag::Log => 1,
            OperatorTag::Add
            | OperatorTag::Sub
            | OperatorTag::Mul
            | OperatorTag::Div
            | OperatorTag::PowNode => 2,
        }
    }

    /// Short lowercase name used in summaries and rendered graphs.
    pub fn name(&self) -> &'static str {
        match self {
            OperatorTag::Assign => "assign",
            OperatorTag::Add => "add",
            OperatorTag::Sub => "sub",
            OperatorTag::Mul => "mul",
            OperatorTag::Div => "div",
            OperatorTag::Pow { .. } | OperatorTag::PowNode => "pow",
            OperatorTag::Log => "ln",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, OperatorTag::Assign)
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
