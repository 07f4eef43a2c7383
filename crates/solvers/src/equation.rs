//! Solvers for scalar equations, finding `x` such that `f(x) = 0`.
//!
//! Functions and derivatives are supplied as [`Function`] values, so a
//! function that is undefined at some point can report it and the solver
//! returns that error to the caller unchanged.
//!
//! # Solvers
//!
//! - [`newton::modified`]: Newton iteration with the derivative frozen at the
//!   start point
//! - [`newton::standard`]: classic Newton iteration, derivative refreshed every
//!   step
//!
//! [`Function`]: rootline_core::Function

pub mod newton;
