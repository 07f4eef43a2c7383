//! Line-oriented prompts that re-ask until the answer is acceptable.

use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
};

use crate::params::{Params, parse_number};

/// Reads prompted answers from `input`, echoing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks until the answer is an integer within `range`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, including [`io::ErrorKind::UnexpectedEof`] when
    /// input runs out before a valid answer.
    pub fn choice(&mut self, question: &str, range: RangeInclusive<u32>) -> io::Result<u32> {
        loop {
            let answer = self.line(question)?;
            match answer.parse::<u32>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => writeln!(
                    self.output,
                    "Please enter a number from {} to {}.",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    /// Asks until the answer parses as a number.
    ///
    /// # Errors
    ///
    /// See [`Prompter::choice`].
    pub fn number(&mut self, question: &str) -> io::Result<f64> {
        self.number_where(question, |_| true, "Please enter a number.")
    }

    /// Asks until the answer is a positive finite number.
    ///
    /// # Errors
    ///
    /// See [`Prompter::choice`].
    pub fn positive(&mut self, question: &str) -> io::Result<f64> {
        self.number_where(
            question,
            |x| x.is_finite() && x > 0.0,
            "Please enter a positive number.",
        )
    }

    /// Asks for each parameter in turn.
    ///
    /// # Errors
    ///
    /// See [`Prompter::choice`].
    pub fn params(&mut self) -> io::Result<Params> {
        Ok(Params {
            a: self.number("a = ")?,
            b: self.number("b = ")?,
            c: self.number("c = ")?,
            eps: self.positive("eps (> 0) = ")?,
            x0: self.number("x0 = ")?,
        })
    }

    /// Prints `question` and returns the trimmed answer line.
    ///
    /// # Errors
    ///
    /// See [`Prompter::choice`].
    pub fn line(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            ));
        }
        Ok(answer.trim().to_owned())
    }

    fn number_where(
        &mut self,
        question: &str,
        accept: impl Fn(f64) -> bool,
        hint: &str,
    ) -> io::Result<f64> {
        loop {
            let answer = self.line(question)?;
            match parse_number(&answer) {
                Ok(x) if accept(x) => return Ok(x),
                _ => writeln!(self.output, "{hint}")?,
            }
        }
    }
}
