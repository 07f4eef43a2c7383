//! Console front end: solves one equation with modified Newton and compares
//! the result to standard Newton.
//!
//! # Usage
//!
//! ```text
//! rootline            # prompts, prints the report, opens the plot
//! rootline --no-plot  # same, without the plot window
//! RUST_LOG=debug rootline
//! ```
//!
//! The user picks one of three equation families, then enters `a b c eps x0`
//! either at the keyboard or from a text file. Setting `RUST_LOG=debug` logs
//! every iteration of both solvers.

mod family;
mod params;
mod prompt;
mod report;

use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use log::LevelFilter;
use rootline_core::Function;
use rootline_observers::LogObserver;
use rootline_solvers::equation::newton::{self, Config, Solution};

use crate::{
    family::{Equation, Family},
    params::Params,
    prompt::Prompter,
};

fn main() {
    env_logger::builder()
        .default_format()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut plot = true;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-plot" => plot = false,
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: rootline [--no-plot]");
                std::process::exit(1);
            }
        }
    }

    if let Err(err) = run(plot) {
        log::error!("{err}");
        let mut source = err.source();
        while let Some(cause) = source {
            log::error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(plot: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let family = read_family(&mut prompter)?;
    let params = read_params(&mut prompter)?;
    let equation = Equation {
        family,
        a: params.a,
        b: params.b,
        c: params.c,
    };
    log::info!(
        "solving {} with a={} b={} c={} from x0={} (eps={:e})",
        equation.family,
        params.a,
        params.b,
        params.c,
        params.x0,
        params.eps
    );

    let f = equation.function();
    let df = equation.derivative();
    let (modified, reference) = solve_both(&f, &df, &params)?;

    let mut out = io::stdout().lock();
    report::write(&mut out, &modified, &reference)?;
    out.flush()?;

    if plot {
        show_plot(&f, &modified)?;
    }
    Ok(())
}

/// Runs modified Newton with the user's tolerance, and standard Newton as the
/// reference.
fn solve_both<F: Function, D: Function>(
    f: &F,
    df: &D,
    params: &Params,
) -> Result<(Solution, Solution), Box<dyn Error>> {
    let modified = newton::modified::solve(
        f,
        df,
        params.x0,
        &Config::modified(params.eps)?,
        LogObserver::new("rootline::modified"),
    )?;
    log::info!(
        "modified Newton: {:?} at x={} after {} iterations",
        modified.status,
        modified.root,
        modified.iters
    );

    let reference = newton::standard::solve(
        f,
        df,
        params.x0,
        &Config::standard(),
        LogObserver::new("rootline::standard"),
    )?;
    log::info!(
        "standard Newton: {:?} at x={} after {} iterations",
        reference.status,
        reference.root,
        reference.iters
    );

    Ok((modified, reference))
}

fn read_family<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Family, Box<dyn Error>> {
    let mut menu = String::from("Modified Newton root finder.\nChoose an equation:\n");
    for (number, family) in (1..).zip(Family::ALL) {
        menu.push_str(&format!("{number}) {family}\n"));
    }
    menu.push_str("> ");

    let last = u32::try_from(Family::ALL.len())?;
    let number = prompter.choice(&menu, 1..=last)?;
    Ok(Family::from_menu(number).ok_or("menu choice out of range")?)
}

fn read_params<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Params, Box<dyn Error>> {
    let mode = prompter.choice("Enter parameters from: 1 - keyboard, 2 - file\n> ", 1..=2)?;
    if mode == 1 {
        return Ok(prompter.params()?);
    }

    let path = prompter.line("Parameter file (a b c eps x0, e.g. input.txt): ")?;
    Ok(Params::from_file(path)?)
}

#[cfg(feature = "plot")]
fn show_plot<F: Function>(f: &F, modified: &Solution) -> Result<(), Box<dyn Error>> {
    use rootline_observers::{FunctionPlot, ShowConfig};

    FunctionPlot::new(f, modified.plot_points())
        .show(ShowConfig::new().title("rootline: modified Newton").legend())?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn show_plot<F: Function>(_f: &F, _modified: &Solution) -> Result<(), Box<dyn Error>> {
    log::info!("built without the `plot` feature; skipping the plot window");
    Ok(())
}
