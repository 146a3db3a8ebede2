//! Solvers for quadra.
//!
//! # Modules
//!
//! - [`quadratic`]: real roots of `ax² + bx + c = 0`, dispatching between
//!   closed forms and a Catalan number power series

pub mod quadratic;
