//! Core traits and types for quadra.
//!
//! This crate defines the shared building blocks that the solvers and
//! observers crates build on:
//!
//! - [`Equation`]: a real quadratic `ax² + bx + c = 0`
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`catalan`]: exact Catalan numbers, one at a time or as a sequence

pub mod catalan;

mod equation;
mod observer;

pub use equation::Equation;
pub use observer::Observer;
