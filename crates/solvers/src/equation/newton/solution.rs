/// One snapshot of the iteration state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Step number (0 for the start point).
    pub index: usize,

    /// The iterate `x_n`.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Signed step `x_n - x_{n-1}` (0.0 for the start point).
    pub delta: f64,
}

impl IterationRecord {
    /// Creates the record for the start point.
    pub(super) fn start(x: f64, fx: f64) -> Self {
        Self {
            index: 0,
            x,
            fx,
            delta: 0.0,
        }
    }
}

/// The stopping test that ended a converged solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// `|x_{n+1} - x_n| < tol`, checked first.
    Step,

    /// `|f(x_{n+1})| < tol`.
    Residual,
}

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A stopping test held at the final recorded step.
    Converged(Criterion),

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The refreshed slope became NaN or near zero (standard solver only).
    DerivativeVanished,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate reached, meaningful whether or not the solve converged.
    pub root: f64,

    /// Number of steps performed.
    pub iters: usize,

    /// Start point followed by one record per step, in iteration order.
    pub trace: Vec<IterationRecord>,
}

impl Solution {
    /// Returns true if a stopping test ended the solve.
    #[must_use]
    pub fn converged(&self) -> bool {
        matches!(self.status, Status::Converged(_))
    }

    /// Returns the iterates `x_0, x_1, ...` in order, for plotting.
    pub fn plot_points(&self) -> impl Iterator<Item = f64> + '_ {
        self.trace.iter().map(|record| record.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, x: f64) -> IterationRecord {
        IterationRecord {
            index,
            x,
            fx: 0.0,
            delta: 0.0,
        }
    }

    #[test]
    fn start_record_has_zero_delta() {
        let start = IterationRecord::start(1.5, -0.25);
        assert_eq!(start.index, 0);
        assert_eq!(start.delta.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn plot_points_follow_trace_order() {
        let solution = Solution {
            status: Status::MaxIters,
            root: 3.0,
            iters: 2,
            trace: vec![record(0, 1.0), record(1, 2.0), record(2, 3.0)],
        };

        assert!(!solution.converged());
        assert_eq!(solution.plot_points().collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn only_converged_status_counts_as_converged() {
        let mut solution = Solution {
            status: Status::Converged(Criterion::Residual),
            root: 0.0,
            iters: 0,
            trace: vec![record(0, 0.0)],
        };
        assert!(solution.converged());

        for status in [
            Status::MaxIters,
            Status::DerivativeVanished,
            Status::StoppedByObserver,
        ] {
            solution.status = status;
            assert!(!solution.converged());
        }
    }
}
