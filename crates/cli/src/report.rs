//! Console report comparing a modified Newton solve to a reference solve.

use std::io::{self, Write};

use rootline_solvers::equation::newton::{Config, IterationRecord, Solution, Status};

/// Added to `|reference|` so the relative error stays finite at a zero root.
const RELATIVE_GUARD: f64 = 1e-30;

/// How far an approximation lies from a reference root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub absolute: f64,
    pub relative: f64,
}

impl Deviation {
    #[must_use]
    pub fn between(approximation: f64, reference: f64) -> Self {
        let absolute = (approximation - reference).abs();
        Self {
            absolute,
            relative: absolute / (reference.abs() + RELATIVE_GUARD),
        }
    }
}

/// Writes the results section: both roots, their deviation, and the trace.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write<W: Write>(out: &mut W, modified: &Solution, reference: &Solution) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "---- RESULTS ----")?;
    writeln!(out, "Approximate root (modified Newton): x ~ {}", modified.root)?;
    writeln!(out, "{}", outcome(modified))?;

    if reference.converged() {
        writeln!(
            out,
            "Reference root (standard Newton, tol={:e}): x = {}",
            Config::STANDARD_TOL,
            reference.root
        )?;
        let deviation = Deviation::between(modified.root, reference.root);
        writeln!(out, "Absolute error: {:.6e}", deviation.absolute)?;
        writeln!(out, "Relative error: {:.6e}", deviation.relative)?;
    } else {
        writeln!(
            out,
            "The reference root was not found by standard Newton ({}).",
            outcome(reference)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Iterations (modified Newton):")?;
    write_table(out, &modified.trace)
}

/// Writes one row per record: index, `x_n`, `f(x_n)`, step.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_table<W: Write>(out: &mut W, trace: &[IterationRecord]) -> io::Result<()> {
    writeln!(out, "n\t x_n\t\t f(x_n)\t\t delta")?;
    for record in trace {
        writeln!(
            out,
            "{}\t {:.6e}\t {:.6e}\t {:.6e}",
            record.index, record.x, record.fx, record.delta
        )?;
    }
    Ok(())
}

fn outcome(solution: &Solution) -> String {
    match solution.status {
        Status::Converged(criterion) => {
            format!(" (iterations: {}, {criterion:?} test)", solution.iters)
        }
        Status::MaxIters => format!(" (did not converge within {} iterations)", solution.iters),
        Status::DerivativeVanished => {
            format!(" (derivative vanished after {} iterations)", solution.iters)
        }
        Status::StoppedByObserver => format!(" (stopped after {} iterations)", solution.iters),
    }
}
