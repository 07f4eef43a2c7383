//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry the signed step `x_{n+1} - x_n`
//! - [`HasResidual`]: events that carry `f(x)` at the new iterate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use rootline_solvers::equation::newton;

/// An event that carries the signed step of an iteration.
pub trait HasStep {
    /// Returns the step `x_{n+1} - x_n`.
    fn step(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x)` at the new iterate.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasStep for newton::Event {
    fn step(&self) -> f64 {
        self.delta
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
