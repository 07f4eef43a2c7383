use rootline_core::Observer;
use rootline_solvers::equation::newton::Event;

/// An observer that writes each iteration event to the `log` facade.
///
/// Records are emitted at `debug` level under a configurable target, so a
/// caller running two solvers can tell their traces apart. The observer never
/// returns an action.
///
/// # Example
///
/// ```ignore
/// let observer = LogObserver::new("rootline::modified");
/// newton::modified::solve(&f, &df, x0, &config, observer)?;
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: String,
}

impl LogObserver {
    /// Creates an observer logging under `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<A> Observer<Event, A> for LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        log::debug!(
            target: &self.target,
            "iter={} x={:e} f(x)={:e} delta={:e} slope={:e}",
            event.iter,
            event.x,
            event.fx,
            event.delta,
            event.derivative,
        );
        None
    }
}
