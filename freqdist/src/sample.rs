//! A validated sample of observations.

use crate::Error;

/// An ordered, non-empty sequence of finite observations.
///
/// Duplicates are allowed. Missing entries must be removed before
/// constructing the sample, see [`Sample::from_iter_lossy`].
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Sample {
    /// Validates the observations and returns a sample.
    ///
    /// Returns [`Error::EmptySample`] when there are no observations and
    /// [`Error::NonFinite`] when any observation is `NaN` or infinite.
    pub fn new(values: Vec<f64>) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptySample);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in &values {
            if !value.is_finite() {
                return Err(Error::NonFinite(*value));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        Ok(Self { values, min, max })
    }

    /// Builds a sample after dropping `NaN` entries, which stand for missing
    /// cells.
    pub fn from_iter_lossy<I: IntoIterator<Item = f64>>(values: I) -> Result<Self, Error> {
        Self::new(values.into_iter().filter(|v| !v.is_nan()).collect())
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A sample is never empty, this exists to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        Self::new(values.to_vec())
    }
}
