use thiserror::Error;

/// Configuration for the Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}

impl Config {
    /// Iteration cap used by [`Config::modified`].
    pub const MODIFIED_MAX_ITERS: usize = 1000;

    /// Iteration cap used by [`Config::standard`].
    pub const STANDARD_MAX_ITERS: usize = 2000;

    /// Tolerance used by [`Config::standard`].
    pub const STANDARD_TOL: f64 = 1e-14;

    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { max_iters, tol })
    }

    /// Config for the modified solver: the given tolerance and 1000 iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn modified(tol: f64) -> Result<Self, ConfigError> {
        Self::new(Self::MODIFIED_MAX_ITERS, tol)
    }

    /// Config for the standard solver: `tol = 1e-14` and 2000 iterations.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            max_iters: Self::STANDARD_MAX_ITERS,
            tol: Self::STANDARD_TOL,
        }
    }

    /// Returns a copy with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Returns the maximum number of steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance shared by the step and residual tests.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}
