// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::add_op;
pub use div::{div_op, rdiv_op};
pub use mul::mul_op;
pub use pow::{pow_node_op, pow_op, rpow_op};
pub use sub::{rsub_op, sub_op};
