//! Parameter input: `a b c eps x0`.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;

/// Number of values a parameter set is made of.
const FIELDS: usize = 5;

/// Errors that can occur while reading parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("cannot read parameter file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("expected 5 numbers (a b c eps x0), found {found}")]
    NotEnoughTokens { found: usize },

    #[error("not a number: {token:?}")]
    InvalidNumber { token: String },

    #[error("tolerance must be positive and finite, got {eps}")]
    NonPositiveTolerance { eps: f64 },
}

/// Parses a number written with either `.` or `,` as the decimal separator.
///
/// # Errors
///
/// Returns [`ParamsError::InvalidNumber`] if neither form parses.
pub fn parse_number(token: &str) -> Result<f64, ParamsError> {
    let token = token.trim();
    token
        .parse()
        .or_else(|_| token.replace(',', ".").parse())
        .map_err(|_| ParamsError::InvalidNumber {
            token: token.to_owned(),
        })
}

/// The values a solve is run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub eps: f64,
    pub x0: f64,
}

impl Params {
    /// Reads parameters from a whitespace-separated text file.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Io`] if the file cannot be read, or any error
    /// from parsing its contents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }
}

impl FromStr for Params {
    type Err = ParamsError;

    /// Parses the first five whitespace-separated tokens; the rest are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().take(FIELDS).collect();
        let &[a, b, c, eps, x0] = tokens.as_slice() else {
            return Err(ParamsError::NotEnoughTokens {
                found: tokens.len(),
            });
        };

        let eps = parse_number(eps)?;
        if !(eps.is_finite() && eps > 0.0) {
            return Err(ParamsError::NonPositiveTolerance { eps });
        }

        Ok(Self {
            a: parse_number(a)?,
            b: parse_number(b)?,
            c: parse_number(c)?,
            eps,
            x0: parse_number(x0)?,
        })
    }
}
