//! Standard Newton: the derivative is re-evaluated at every iterate.
//!
//! There is no upfront check. If the slope at the current iterate is NaN or
//! near zero, the solve stops with
//! [`Status::DerivativeVanished`](super::Status::DerivativeVanished) and
//! reports that iterate as `root`.

use rootline_core::{Function, Observer};

use super::{Action, Config, Error, Event, Solution, iterate::iterate, slope::Fresh};

/// Finds a root of `function`, refreshing the slope each step.
///
/// The observer receives an [`Event`] after each step.
///
/// # Errors
///
/// Passes through any failure of `function` or `derivative`.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<F::Error, D::Error>>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    iterate(function, Fresh::new(derivative), x0, config, observer)
}

/// Runs the standard solver without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error<F::Error, D::Error>>
where
    F: Function,
    D: Function,
{
    solve(function, derivative, x0, config, ())
}
