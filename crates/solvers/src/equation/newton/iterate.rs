use rootline_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, IterationRecord, Solution,
    slope::Slope,
    solution::{Criterion, Status},
};

/// Runs the Newton loop shared by both solvers.
///
/// The slope strategy decides whether the derivative is frozen or refreshed.
/// An unusable slope ends the loop with [`Status::DerivativeVanished`], and
/// `root` is the iterate the slope was requested at.
///
/// # Errors
///
/// Returns an error if the function or the slope strategy fails.
pub(super) fn iterate<F, S, Obs>(
    function: &F,
    mut slope: S,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error, S::Error>>
where
    F: Function,
    S: Slope,
    Obs: Observer<Event, Action>,
{
    let tol = config.tol();

    let mut x = x0;
    let mut fx = function.call(x).map_err(Error::Function)?;
    let mut trace = vec![IterationRecord::start(x, fx)];

    for n in 0..config.max_iters() {
        let Some(derivative) = slope.at(x).map_err(Error::Derivative)? else {
            return Ok(Solution {
                status: Status::DerivativeVanished,
                root: x,
                iters: n,
                trace,
            });
        };

        let next = x - fx / derivative;
        let delta = next - x;
        let f_next = function.call(next).map_err(Error::Function)?;

        let iter = n + 1;
        trace.push(IterationRecord {
            index: iter,
            x: next,
            fx: f_next,
            delta,
        });

        let event = Event {
            iter,
            x: next,
            fx: f_next,
            delta,
            derivative,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: next,
                iters: iter,
                trace,
            });
        }

        if let Some(criterion) = stopping_test(delta, f_next, tol) {
            return Ok(Solution {
                status: Status::Converged(criterion),
                root: next,
                iters: iter,
                trace,
            });
        }

        x = next;
        fx = f_next;
    }

    Ok(Solution {
        status: Status::MaxIters,
        root: x,
        iters: config.max_iters(),
        trace,
    })
}

/// Applies the step test, then the residual test.
fn stopping_test(delta: f64, fx: f64, tol: f64) -> Option<Criterion> {
    if delta.abs() < tol {
        Some(Criterion::Step)
    } else if fx.abs() < tol {
        Some(Criterion::Residual)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_test_wins_ties() {
        assert_eq!(stopping_test(1e-9, 1e-9, 1e-8), Some(Criterion::Step));
    }

    #[test]
    fn residual_test_applies_when_step_is_large() {
        assert_eq!(stopping_test(0.5, 1e-9, 1e-8), Some(Criterion::Residual));
    }

    #[test]
    fn nan_never_passes() {
        assert_eq!(stopping_test(f64::NAN, f64::NAN, 1e-8), None);
        assert_eq!(stopping_test(1e-2, 1e-2, 1e-8), None);
    }
}
