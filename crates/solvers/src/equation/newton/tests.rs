use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use rootline_core::Total;

use super::{
    Action, Config, Criterion, Error, Event, IterationRecord, Solution, Status, modified,
    standard,
};

/// Square root shifted down by 3, undefined for negative arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("sqrt undefined at {x}")]
struct NegativeArgument {
    x: f64,
}

fn shifted_sqrt(x: f64) -> Result<f64, NegativeArgument> {
    if x < 0.0 {
        Err(NegativeArgument { x })
    } else {
        Ok(x.sqrt() - 3.0)
    }
}

fn shifted_sqrt_derivative(x: f64) -> Result<f64, NegativeArgument> {
    if x < 0.0 {
        Err(NegativeArgument { x })
    } else {
        Ok(0.5 / x.sqrt())
    }
}

fn cube_minus_two() -> (
    Total<impl Fn(f64) -> f64>,
    Total<impl Fn(f64) -> f64>,
) {
    (Total(|x: f64| x.powi(3) - 2.0), Total(|x: f64| 3.0 * x * x))
}

fn assert_trace_invariants(solution: &Solution, x0: f64, f: impl Fn(f64) -> f64) {
    assert_eq!(solution.trace.len(), solution.iters + 1);
    assert_eq!(
        solution.trace[0],
        IterationRecord {
            index: 0,
            x: x0,
            fx: f(x0),
            delta: 0.0,
        }
    );
    for (position, record) in solution.trace.iter().enumerate() {
        assert_eq!(record.index, position);
    }
}

#[test]
fn cube_root_of_two_with_both_solvers() {
    let (f, df) = cube_minus_two();
    let expected = 2.0_f64.cbrt();

    let modified = modified::solve_unobserved(&f, &df, 1.0, &Config::modified(1e-8).unwrap())
        .expect("slope at x0 is 3");
    assert!(modified.converged());
    assert_relative_eq!(modified.root, expected, epsilon = 1e-5);
    assert_trace_invariants(&modified, 1.0, |x| x.powi(3) - 2.0);

    let standard = standard::solve_unobserved(&f, &df, 1.0, &Config::standard())
        .expect("no failing evaluations");
    assert!(standard.converged());
    assert_relative_eq!(standard.root, expected, epsilon = 1e-12);
    assert_trace_invariants(&standard, 1.0, |x| x.powi(3) - 2.0);

    assert!((modified.root - standard.root).abs() < 1e-4);
    assert!(modified.iters > standard.iters);
}

#[test]
fn reciprocal_converges_to_one() {
    let f = Total(|x: f64| 1.0 / x - 1.0);
    let df = Total(|x: f64| -1.0 / (x * x));
    let config = Config::new(2000, 1e-12).unwrap();

    let solution = standard::solve_unobserved(&f, &df, 1.5, &config).expect("should solve");

    assert!(solution.converged());
    assert_relative_eq!(solution.root, 1.0, epsilon = 1e-8);
    assert_trace_invariants(&solution, 1.5, |x| 1.0 / x - 1.0);
}

#[test]
fn double_root_of_cosine_meets_residual_tolerance() {
    let f = Total(|x: f64| x.cos() - 1.0);
    let df = Total(|x: f64| -x.sin());
    let config = Config::new(200, 1e-12).unwrap();

    let solution = standard::solve_unobserved(&f, &df, 0.1, &config).expect("should solve");

    assert!(solution.converged());
    assert!((solution.root.cos() - 1.0).abs() < 1e-12);
}

#[test]
fn modified_rejects_zero_slope_at_start() {
    let f = Total(|x: f64| x.powi(3));
    let df = Total(|x: f64| 3.0 * x * x);

    let result = modified::solve_unobserved(&f, &df, 0.0, &Config::modified(1e-8).unwrap());

    assert!(matches!(
        result,
        Err(Error::DerivativeUndefinedAtStart { x0, .. }) if x0 == 0.0
    ));
}

#[test]
fn modified_rejects_constant_function() {
    let f = Total(|_: f64| 1.0);
    let df = Total(|_: f64| 0.0);
    let config = Config::modified(1e-6).unwrap();

    for x0 in [-3.0, 0.0, 7.5] {
        let result = modified::solve_unobserved(&f, &df, x0, &config);
        assert!(matches!(
            result,
            Err(Error::DerivativeUndefinedAtStart { .. })
        ));
    }
}

#[test]
fn modified_rejects_nan_slope_at_start() {
    let f = Total(|x: f64| x - 1.0);
    let df = Total(|_: f64| f64::NAN);

    let result = modified::solve_unobserved(&f, &df, 2.0, &Config::modified(1e-6).unwrap());

    assert!(matches!(
        result,
        Err(Error::DerivativeUndefinedAtStart { derivative, .. }) if derivative.is_nan()
    ));
}

#[test]
fn modified_without_real_root_runs_out_of_iterations() {
    let f = Total(|x: f64| x * x + 1.0);
    let df = Total(|x: f64| 2.0 * x);
    let config = Config::modified(1e-8).unwrap().with_max_iters(50);

    let solution = modified::solve_unobserved(&f, &df, 1.0, &config).expect("slope at x0 is 2");

    assert!(!solution.converged());
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 50);
    assert_eq!(solution.trace.len(), 51);
}

#[test]
fn modified_reuses_the_start_slope() {
    let f = Total(|x: f64| x * x - 4.0);
    let df = Total(|x: f64| 2.0 * x);
    let config = Config::modified(1e-10).unwrap();

    let mut slopes = Vec::new();
    modified::solve(&f, &df, 3.0, &config, |event: &Event| {
        slopes.push(event.derivative);
        None
    })
    .expect("should solve");

    assert!(slopes.len() > 1);
    assert!(slopes.iter().all(|&slope| slope.to_bits() == 6.0_f64.to_bits()));
}

#[test]
fn standard_refreshes_the_slope() {
    let f = Total(|x: f64| x * x - 4.0);
    let df = Total(|x: f64| 2.0 * x);

    let mut slopes = Vec::new();
    standard::solve(&f, &df, 3.0, &Config::standard(), |event: &Event| {
        slopes.push(event.derivative);
        None
    })
    .expect("should solve");

    assert_relative_eq!(slopes[0], 6.0);
    assert_relative_eq!(slopes[1], 2.0 * (3.0 - 5.0 / 6.0));
}

#[test]
fn standard_stops_softly_when_slope_vanishes_at_start() {
    let f = Total(|x: f64| x * x + 1.0);
    let df = Total(|x: f64| 2.0 * x);

    let solution =
        standard::solve_unobserved(&f, &df, 0.0, &Config::standard()).expect("not an error");

    assert_eq!(solution.status, Status::DerivativeVanished);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.trace.len(), 1);
    assert_relative_eq!(solution.root, 0.0);
}

#[test]
fn standard_stops_softly_when_slope_vanishes_mid_iteration() {
    // From x0 = 1 the first step lands exactly on 0, where f'(0) = 0.
    let f = Total(|x: f64| x * x + 1.0);
    let df = Total(|x: f64| 2.0 * x);

    let solution =
        standard::solve_unobserved(&f, &df, 1.0, &Config::standard()).expect("not an error");

    assert_eq!(solution.status, Status::DerivativeVanished);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.trace.len(), 2);
    assert_relative_eq!(solution.root, 0.0);
    assert_relative_eq!(solution.trace[1].delta, -1.0);
}

#[test]
fn standard_cycle_runs_out_of_iterations() {
    // Newton cycles 0 -> 1 -> 0 on x³ - 2x + 2.
    let f = Total(|x: f64| x.powi(3) - 2.0 * x + 2.0);
    let df = Total(|x: f64| 3.0 * x * x - 2.0);
    let config = Config::standard().with_max_iters(40);

    let solution = standard::solve_unobserved(&f, &df, 0.0, &config).expect("not an error");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 40);
    assert_eq!(solution.trace.len(), 41);
    assert_relative_eq!(solution.root, 0.0);
    assert_relative_eq!(solution.trace[1].x, 1.0);
}

#[test]
fn zero_iters_returns_start_point() {
    let (f, df) = cube_minus_two();
    let config = Config::modified(1e-8).unwrap().with_max_iters(0);

    let solution = modified::solve_unobserved(&f, &df, 1.0, &config).expect("slope at x0 is 3");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.root, 1.0);
    assert_trace_invariants(&solution, 1.0, |x| x.powi(3) - 2.0);
}

#[test]
fn exact_root_at_start_converges_on_step_test() {
    let f = Total(|x: f64| x - 2.0);
    let df = Total(|_: f64| 1.0);

    let solution =
        standard::solve_unobserved(&f, &df, 2.0, &Config::standard()).expect("should solve");

    assert_eq!(solution.status, Status::Converged(Criterion::Step));
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root, 2.0);
}

#[test]
fn residual_test_fires_when_step_is_still_large() {
    // Steep line: one step lands on the root, but the step itself is 1.
    let f = Total(|x: f64| 1e9 * (x - 1.0));
    let df = Total(|_: f64| 1e9);
    let config = Config::new(10, 1e-3).unwrap();

    let solution = modified::solve_unobserved(&f, &df, 2.0, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged(Criterion::Residual));
    assert_eq!(solution.iters, 1);
}

#[test]
fn function_failure_is_returned_unchanged() {
    // From x0 = 64 the first standard step lands at 64 - 5 / 0.0625 = -16.
    let result = standard::solve_unobserved(
        &shifted_sqrt,
        &shifted_sqrt_derivative,
        64.0,
        &Config::standard(),
    );

    match result {
        Err(Error::Function(error)) => assert_eq!(error, NegativeArgument { x: -16.0 }),
        other => panic!("expected function failure, got {other:?}"),
    }
}

#[test]
fn derivative_failure_at_start_is_returned_unchanged() {
    let result = modified::solve_unobserved(
        &shifted_sqrt,
        &shifted_sqrt_derivative,
        -1.0,
        &Config::modified(1e-8).unwrap(),
    );

    match result {
        Err(Error::Derivative(error)) => assert_eq!(error, NegativeArgument { x: -1.0 }),
        other => panic!("expected derivative failure, got {other:?}"),
    }
}

#[test]
fn fallible_functions_solve_inside_their_domain() {
    let solution = modified::solve_unobserved(
        &shifted_sqrt,
        &shifted_sqrt_derivative,
        1.0,
        &Config::modified(1e-10).unwrap(),
    )
    .expect("iterates stay positive");

    assert!(solution.converged());
    assert_relative_eq!(solution.root, 9.0, epsilon = 1e-6);
}

#[test]
fn observer_can_stop_iteration() {
    let (f, df) = cube_minus_two();

    let mut calls = 0usize;
    let observer = |event: &Event| {
        calls += 1;
        if event.iter >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = modified::solve(&f, &df, 1.0, &Config::modified(1e-12).unwrap(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trace.len(), 4);
    assert_relative_eq!(solution.root, solution.trace[3].x);
    assert_eq!(calls, 3);
}

#[test]
fn events_mirror_appended_records() {
    let (f, df) = cube_minus_two();

    let mut events = Vec::new();
    let solution = standard::solve(&f, &df, 1.0, &Config::standard(), |event: &Event| {
        events.push(*event);
        None::<Action>
    })
    .expect("should solve");

    assert_eq!(events.len(), solution.iters);
    for (event, record) in events.iter().zip(&solution.trace[1..]) {
        assert_eq!(event.iter, record.index);
        assert_eq!(event.x.to_bits(), record.x.to_bits());
        assert_eq!(event.fx.to_bits(), record.fx.to_bits());
        assert_eq!(event.delta.to_bits(), record.delta.to_bits());
    }
}

#[test]
fn plot_points_project_the_trace() {
    let (f, df) = cube_minus_two();

    let solution = standard::solve_unobserved(&f, &df, 1.0, &Config::standard())
        .expect("should solve");

    let points: Vec<f64> = solution.plot_points().collect();
    assert_eq!(points.len(), solution.trace.len());
    assert_relative_eq!(points[0], 1.0);
    assert_relative_eq!(*points.last().unwrap(), solution.root);
}

#[test]
fn infallible_errors_are_uninhabited() {
    let (f, df) = cube_minus_two();
    let result: Result<Solution, Error<Infallible, Infallible>> =
        standard::solve_unobserved(&f, &df, 1.0, &Config::standard());
    assert!(result.is_ok());
}
