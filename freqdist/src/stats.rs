//! Descriptive statistics that determine the binning of a sample.

use crate::Sample;

/// Number of classes for a sample of `n` observations using Sturges' rule,
/// `ceil(1 + 3.3 * log10(n))`.
///
/// Returns `None` for `n == 0`, where the logarithm is undefined.
pub fn sturges(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    Some((1.0 + 3.3 * (n as f64).log10()).ceil() as usize)
}

/// Class width `ceil(range / classes)`, never less than one.
///
/// A sample where every observation is equal has a zero range. A zero width
/// would produce bins which cannot be told apart, so the width is clamped.
pub fn class_width(range: f64, classes: usize) -> i64 {
    let classes = classes.max(1) as f64;
    ((range / classes).ceil() as i64).max(1)
}

/// Summary of a sample and the binning parameters derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct SummaryStats {
    pub(crate) n: usize,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) range: f64,
    pub(crate) classes: usize,
    pub(crate) width: i64,
}

impl SummaryStats {
    pub fn new(sample: &Sample) -> Self {
        let n = sample.len();
        let min = sample.min();
        let max = sample.max();
        let range = max - min;
        // a sample is non-empty so this is always at least one
        let classes = sturges(n).unwrap_or(1);
        let width = class_width(range, classes);

        Self {
            n,
            min,
            max,
            range,
            classes,
            width,
        }
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Smallest observation.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Class count `k` from Sturges' rule.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Effective class width `h`.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Returns true when the computed width was zero and has been raised to
    /// one, which happens only for a zero range.
    pub fn width_clamped(&self) -> bool {
        (self.range / self.classes as f64).ceil() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sturges_rule() {
        assert_eq!(sturges(0), None);
        assert_eq!(sturges(1), Some(1));
        assert_eq!(sturges(2), Some(2));
        assert_eq!(sturges(3), Some(3));
        assert_eq!(sturges(10), Some(5));
        assert_eq!(sturges(36), Some(7));
        assert_eq!(sturges(100), Some(8));
        assert_eq!(sturges(1000), Some(11));
    }

    #[test]
    fn width() {
        assert_eq!(class_width(20.0, 5), 4);
        assert_eq!(class_width(21.0, 5), 5);
        assert_eq!(class_width(0.5, 2), 1);
        assert_eq!(class_width(0.0, 3), 1);
    }

    #[test]
    fn summary() {
        let sample =
            Sample::new(vec![10.0, 12.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0]).unwrap();
        let stats = SummaryStats::new(&sample);
        assert_eq!(stats.n(), 10);
        assert_eq!(stats.min(), 10.0);
        assert_eq!(stats.max(), 30.0);
        assert_eq!(stats.range(), 20.0);
        assert_eq!(stats.classes(), 5);
        assert_eq!(stats.width(), 4);
        assert!(!stats.width_clamped());
    }

    #[test]
    // every observation equal, the width is clamped to one
    fn zero_range() {
        let sample = Sample::new(vec![7.0, 7.0, 7.0]).unwrap();
        let stats = SummaryStats::new(&sample);
        assert_eq!(stats.n(), 3);
        assert_eq!(stats.range(), 0.0);
        assert_eq!(stats.classes(), 3);
        assert_eq!(stats.width(), 1);
        assert!(stats.width_clamped());
    }
}
