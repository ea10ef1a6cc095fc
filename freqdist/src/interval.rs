//! Random-number intervals map bins onto the integers `1..=100` for sampling.

use crate::probability::ONE;
use crate::Probability;
use core::fmt;

/// Smallest random number a draw may produce.
pub const DRAW_MIN: u32 = 1;

/// Largest random number a draw may produce.
pub const DRAW_MAX: u32 = ONE;

/// A contiguous range of random numbers assigned to one row of a frequency
/// table, labelled `"{lower} - {upper}"`.
///
/// A row whose reconciled probability is zero gets an empty interval where
/// `upper == lower - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct RandomInterval {
    pub(crate) lower: u32,
    pub(crate) upper: u32,
}

impl RandomInterval {
    /// Builds the intervals for a column of cumulative probabilities. The
    /// upper bound of each interval is the cumulative probability in
    /// hundredths and each lower bound follows the previous upper bound.
    pub fn from_cumulative(cumulative: &[Probability]) -> Vec<Self> {
        let mut lower = DRAW_MIN;
        cumulative
            .iter()
            .map(|p| {
                let interval = Self {
                    lower,
                    upper: p.hundredths(),
                };
                lower = interval.upper + 1;
                interval
            })
            .collect()
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    /// Returns true if the draw falls within this interval.
    pub fn contains(&self, draw: u32) -> bool {
        self.lower <= draw && draw <= self.upper
    }

    /// Number of draws covered by the interval.
    pub fn width(&self) -> u32 {
        (self.upper + 1).saturating_sub(self.lower)
    }
}

impl fmt::Display for RandomInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.lower, self.upper)
    }
}
