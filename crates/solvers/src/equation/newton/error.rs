use thiserror::Error;

/// Errors that can occur during a Newton solve.
///
/// `FE` and `DE` are the error types of the function and its derivative.
/// Their failures are returned as is, without translation.
#[derive(Debug, Error)]
pub enum Error<FE, DE> {
    /// The fixed slope of the modified method is NaN or near zero.
    #[error("derivative at x0 = {x0} is unusable ({derivative}); modified Newton needs a nonzero slope")]
    DerivativeUndefinedAtStart { x0: f64, derivative: f64 },

    #[error("function evaluation failed")]
    Function(#[source] FE),

    #[error("derivative evaluation failed")]
    Derivative(#[source] DE),
}
