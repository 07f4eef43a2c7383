//! Reusable observers for rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Newton solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasStep`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: writes one `log` record per iteration event
//! - [`StepLimit`]: stops a solve whose step grows past a bound
//!
//! # Features
//!
//! - `plot`: Enables [`FunctionPlot`] for drawing a function and its iterates
//!   via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod step_limit;

pub use logging::LogObserver;
pub use step_limit::StepLimit;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{FunctionPlot, ShowConfig};
