use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasStep};

/// Stops a solve once a single step exceeds `max_step` in magnitude.
///
/// Newton iteration on a function without a nearby root tends to take ever
/// larger steps. This observer turns that divergence into an early stop
/// instead of spending the whole iteration budget. Non-finite steps also
/// trigger the stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLimit {
    max_step: f64,
}

impl StepLimit {
    /// Creates an observer that stops on steps larger than `max_step`.
    #[must_use]
    pub fn new(max_step: f64) -> Self {
        Self { max_step }
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        (!step.is_finite() || step.abs() > self.max_step).then(A::stop_early)
    }
}
