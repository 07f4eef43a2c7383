//! Numerical solvers for the rootline workspace.
//!
//! # Modules
//!
//! - [`equation`]: root finders for scalar equations `f(x) = 0`

pub mod equation;
