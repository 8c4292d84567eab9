// Declare the ln module within math_elem
pub mod ln;

// Re-export the public function
pub use ln::ln_op;
