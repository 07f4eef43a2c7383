use std::convert::Infallible;

/// A scalar function that may fail to produce a value.
///
/// Solvers treat a failure as fatal to the current solve and hand the error
/// back to the caller unchanged. Functions with domain singularities (such as
/// `a / (x + b)`) report them through [`Self::Error`] instead of returning a
/// non-finite value.
///
/// Any closure `Fn(f64) -> Result<f64, E>` is a `Function`. Wrap closures that
/// cannot fail in [`Total`].
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Function for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}

/// A function defined everywhere, built from an infallible closure.
///
/// ```
/// use rootline_core::{Function, Total};
///
/// let square = Total(|x: f64| x * x);
/// assert_eq!(square.call(3.0), Ok(9.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Total<F>(pub F);

impl<F> Function for Total<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Infallible> {
        Ok((self.0)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Undefined(f64);

    impl fmt::Display for Undefined {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "undefined at {}", self.0)
        }
    }

    impl std::error::Error for Undefined {}

    #[test]
    fn total_wraps_infallible_closure() {
        let cube = Total(|x: f64| x.powi(3));
        assert_eq!(cube.call(2.0), Ok(8.0));
    }

    #[test]
    fn fallible_closure_is_a_function() {
        let inverse = |x: f64| {
            if x == 0.0 {
                Err(Undefined(x))
            } else {
                Ok(1.0 / x)
            }
        };

        assert_eq!(inverse.call(4.0), Ok(0.25));
        assert_eq!(inverse.call(0.0), Err(Undefined(0.0)));
    }
}
