use std::marker::PhantomData;

use rootline_core::Function;

/// Magnitude below which a slope is treated as zero.
pub const DERIVATIVE_FLOOR: f64 = 1e-16;

/// Returns true if `slope` can be divided by: not NaN and not near zero.
pub(super) fn is_usable(slope: f64) -> bool {
    !slope.is_nan() && slope.abs() >= DERIVATIVE_FLOOR
}

/// Supplies the slope used for each Newton step.
pub(super) trait Slope {
    type Error;

    /// Returns the slope to divide by at `x`, or `None` if it is unusable.
    fn at(&mut self, x: f64) -> Result<Option<f64>, Self::Error>;
}

/// A slope evaluated once and reused for every step.
pub(super) struct Fixed<E> {
    value: f64,
    error: PhantomData<fn() -> E>,
}

impl<E> Fixed<E> {
    /// Wraps a slope that has already passed [`is_usable`].
    pub(super) fn new(value: f64) -> Self {
        Self {
            value,
            error: PhantomData,
        }
    }
}

impl<E> Slope for Fixed<E> {
    type Error = E;

    fn at(&mut self, _x: f64) -> Result<Option<f64>, E> {
        Ok(Some(self.value))
    }
}

/// A slope recomputed from the derivative at every iterate.
pub(super) struct Fresh<'a, D> {
    derivative: &'a D,
}

impl<'a, D> Fresh<'a, D> {
    pub(super) fn new(derivative: &'a D) -> Self {
        Self { derivative }
    }
}

impl<D: Function> Slope for Fresh<'_, D> {
    type Error = D::Error;

    fn at(&mut self, x: f64) -> Result<Option<f64>, D::Error> {
        let slope = self.derivative.call(x)?;
        Ok(is_usable(slope).then_some(slope))
    }
}
