/// Control actions supported by the Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trace so far.
    StopEarly,
}
