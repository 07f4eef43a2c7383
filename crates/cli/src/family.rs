//! The predefined equation families offered by the console.

use std::fmt;

use rootline_core::Function;
use thiserror::Error;

/// Shifts `|x + b|` below this are treated as the pole of `a / (x + b) + c`.
const POLE_GUARD: f64 = 1e-16;

/// One of the three equation shapes a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// `a·x³ + b·x + c`
    Cubic,
    /// `a·cos(x + b) + c`
    Cosine,
    /// `a / (x + b) + c`
    Reciprocal,
}

impl Family {
    /// All families in menu order.
    pub const ALL: [Family; 3] = [Family::Cubic, Family::Cosine, Family::Reciprocal];

    /// Returns the family for a 1-based menu number.
    #[must_use]
    pub fn from_menu(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Returns the formula shown in the menu.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Family::Cubic => "y = a*x^3 + b*x + c",
            Family::Cosine => "y = a*cos(x + b) + c",
            Family::Reciprocal => "y = a/(x + b) + c",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

/// The point where `a / (x + b) + c` or its derivative is undefined.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("x + b is too close to zero at x = {x}; a/(x + b) is undefined")]
pub struct SingularPoint {
    pub x: f64,
}

/// A family with its parameters `a`, `b`, `c` bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    pub family: Family,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Equation {
    /// Evaluates the equation at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularPoint`] at the pole of the reciprocal family.
    pub fn value(&self, x: f64) -> Result<f64, SingularPoint> {
        let Self { a, b, c, .. } = *self;
        match self.family {
            Family::Cubic => Ok(a * x * x * x + b * x + c),
            Family::Cosine => Ok(a * (x + b).cos() + c),
            Family::Reciprocal => Ok(a / self.shift(x)? + c),
        }
    }

    /// Evaluates the derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularPoint`] at the pole of the reciprocal family.
    pub fn slope(&self, x: f64) -> Result<f64, SingularPoint> {
        let Self { a, b, .. } = *self;
        match self.family {
            Family::Cubic => Ok(3.0 * a * x * x + b),
            Family::Cosine => Ok(-a * (x + b).sin()),
            Family::Reciprocal => {
                let shifted = self.shift(x)?;
                Ok(-a / (shifted * shifted))
            }
        }
    }

    /// Returns the equation as a [`Function`].
    pub fn function(&self) -> impl Function<Error = SingularPoint> + '_ {
        move |x: f64| self.value(x)
    }

    /// Returns the derivative as a [`Function`].
    pub fn derivative(&self) -> impl Function<Error = SingularPoint> + '_ {
        move |x: f64| self.slope(x)
    }

    fn shift(&self, x: f64) -> Result<f64, SingularPoint> {
        let shifted = x + self.b;
        if shifted.abs() < POLE_GUARD {
            Err(SingularPoint { x })
        } else {
            Ok(shifted)
        }
    }
}
