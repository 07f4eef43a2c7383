/// Event emitted by the Newton solvers after each completed step.
///
/// The step's [`IterationRecord`](super::IterationRecord) is already in the
/// trace when the event is observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Step number (1-based; record 0 is the start point).
    pub iter: usize,

    /// The new iterate `x_{n+1}`.
    pub x: f64,

    /// Function value at the new iterate.
    pub fx: f64,

    /// Signed step `x_{n+1} - x_n`.
    pub delta: f64,

    /// Slope used for this step.
    pub derivative: f64,
}
