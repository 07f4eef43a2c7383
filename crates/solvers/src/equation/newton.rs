//! Newton-type iteration for scalar equations.
//!
//! # Algorithm
//!
//! Starting from `x0`, both solvers step with
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / d_n
//! ```
//!
//! and differ only in the slope `d_n`:
//!
//! - [`modified`] uses `d_n = f'(x0)` for every step. The slope is checked once,
//!   before iterating: a NaN or near-zero `f'(x0)` is a
//!   [`Error::DerivativeUndefinedAtStart`].
//! - [`standard`] uses `d_n = f'(x_n)`. A NaN or near-zero slope mid-iteration
//!   ends the solve with [`Status::DerivativeVanished`] instead of an error.
//!
//! "Near zero" means `|d| < `[`DERIVATIVE_FLOOR`].
//!
//! # Stopping
//!
//! After each step the solver checks `|x_{n+1} - x_n| < tol`, then
//! `|f(x_{n+1})| < tol`. The first test to hold ends the solve as
//! [`Status::Converged`], tagged with the [`Criterion`] that fired. Running out
//! of iterations is reported as [`Status::MaxIters`], not as an error.
//!
//! # Trace
//!
//! Every [`Solution`] carries the full trace: the start point as record 0 and
//! one [`IterationRecord`] per completed step, so
//! `solution.trace.len() == solution.iters + 1` for every outcome.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed step, after the step's record
//! is appended. Observers can return [`Action::StopEarly`] to halt
//! immediately with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod iterate;
mod slope;
mod solution;

pub mod modified;
pub mod standard;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use slope::DERIVATIVE_FLOOR;
pub use solution::{Criterion, IterationRecord, Solution, Status};
