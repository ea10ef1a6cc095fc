//! Bins represent integer class intervals and the edges used to classify
//! observations into them.

use crate::{Error, SummaryStats};
use core::fmt;

/// An integer class interval, labelled `"{lower} - {upper}"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct Bin {
    pub(crate) lower: i64,
    pub(crate) upper: i64,
}

impl Bin {
    /// Returns the lower bound shown in the label.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Returns the upper bound shown in the label.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Returns the range for the bin.
    pub fn range(&self) -> core::ops::RangeInclusive<i64> {
        self.lower..=self.upper
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.lower, self.upper)
    }
}

/// The `k` contiguous bins for a sample together with the `k + 1` edges used
/// to classify observations.
///
/// The edges are the lower bound of every bin followed by the upper bound of
/// the last bin. Bin `i` holds the values `v` with `edge[i] < v <= edge[i+1]`
/// and the first bin also holds `v == edge[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bins {
    bins: Vec<Bin>,
    edges: Vec<i64>,
}

impl Bins {
    /// Construct `classes` bins of width `width` starting at `floor(min)`.
    ///
    /// Returns [`Error::Overflow`] if any bound does not fit in an `i64`.
    pub fn new(min: f64, classes: usize, width: i64) -> Result<Self, Error> {
        let start = min.floor();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if !(start >= i64::MIN as f64 && start < i64::MAX as f64) {
            return Err(Error::Overflow);
        }

        let mut bins = Vec::with_capacity(classes);
        let mut lower = start as i64;

        for i in 0..classes {
            let upper = lower.checked_add(width).ok_or(Error::Overflow)?;
            bins.push(Bin { lower, upper });
            if i + 1 < classes {
                lower = upper.checked_add(1).ok_or(Error::Overflow)?;
            }
        }

        let mut edges: Vec<i64> = bins.iter().map(|b| b.lower).collect();
        if let Some(last) = bins.last() {
            edges.push(last.upper);
        }

        Ok(Self { bins, edges })
    }

    pub fn from_stats(stats: &SummaryStats) -> Result<Self, Error> {
        Self::new(stats.min(), stats.classes(), stats.width())
    }

    /// Returns the index of the bin the value is classified into.
    pub fn value_to_index(&self, value: f64) -> Result<usize, Error> {
        let (first, last) = match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => (*first as f64, *last as f64),
            _ => return Err(Error::OutOfRange(value)),
        };

        if value < first || value > last {
            return Err(Error::OutOfRange(value));
        }

        // count of upper edges strictly below the value
        Ok(self.edges[1..].partition_point(|edge| (*edge as f64) < value))
    }

    /// Count the observations falling into each bin.
    pub fn counts(&self, values: &[f64]) -> Result<Vec<u64>, Error> {
        let mut counts = vec![0; self.bins.len()];
        for value in values {
            counts[self.value_to_index(*value)?] += 1;
        }
        Ok(counts)
    }

    pub fn edges(&self) -> &[i64] {
        &self.edges
    }

    pub fn as_slice(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
