use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The scalar exponent given to `pow` is not a finite number.
    #[error("Invalid exponent {exponent}: the exponent of pow must be a finite number")]
    InvalidExponent { exponent: f64 },

    /// An operand lies outside the mathematical domain of the operation.
    #[error("Domain error in {operation}: {reason} (operand {operand})")]
    DomainError {
        operation: String,
        operand: f64,
        reason: String,
    },

    /// A raw input could not be coerced into a leaf node.
    #[error("Invalid scalar input: {0}")]
    InvalidScalar(String),

    /// The operands of an operation live in different graphs.
    #[error("Graph mismatch during operation {operation}: operands belong to different graphs")]
    GraphMismatch { operation: String },
}

impl ScalarGradError {
    pub(crate) fn domain(operation: &str, operand: f64, reason: &str) -> Self {
        ScalarGradError::DomainError {
            operation: operation.to_string(),
            operand,
            reason: reason.to_string(),
        }
    }
}
