//! Modified Newton: the derivative is evaluated once, at the start point.
//!
//! Every step divides by `f'(x0)`, so the method converges linearly at best
//! but needs a single derivative evaluation. It is inapplicable when `f'(x0)`
//! is NaN or near zero, which is reported before any step is taken.

use rootline_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::iterate,
    slope::{Fixed, is_usable},
};

/// Finds a root of `function` with the derivative frozen at `x0`.
///
/// The observer receives an [`Event`] after each step.
///
/// # Errors
///
/// Returns [`Error::DerivativeUndefinedAtStart`] if `derivative(x0)` is NaN or
/// its magnitude is below [`DERIVATIVE_FLOOR`](super::DERIVATIVE_FLOOR), and
/// passes through any failure of `function` or `derivative`.
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
    let slope = derivative.call(x0).map_err(Error::Derivative)?;
    if !is_usable(slope) {
        return Err(Error::DerivativeUndefinedAtStart {
            x0,
            derivative: slope,
        });
    }

    iterate(function, Fixed::<D::Error>::new(slope), x0, config, observer)
}

/// Runs the modified solver without observation.
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
