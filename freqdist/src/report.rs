//! A frequency distribution report built from a sample.

use crate::interval::DRAW_MAX;
use crate::probability::{reconcile, ONE};
use crate::*;
use log::debug;

/// One row of a frequency table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct FrequencyRow {
    pub(crate) number: usize,
    pub(crate) bin: Bin,
    pub(crate) frequency: u64,
    pub(crate) probability: Probability,
    pub(crate) cumulative: Probability,
    pub(crate) interval: RandomInterval,
}

impl FrequencyRow {
    /// Sequence number, starting at one.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn bin(&self) -> Bin {
        self.bin
    }

    /// Number of observations classified into the bin.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Running sum of the probabilities up to and including this row.
    pub fn cumulative(&self) -> Probability {
        self.cumulative
    }

    pub fn interval(&self) -> RandomInterval {
        self.interval
    }
}

/// A frequency distribution table and the statistics it was derived from.
///
/// Only bins holding at least one observation are kept. The probability
/// column sums to exactly `1.00` and the random-number intervals partition
/// `1..=100`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct Report {
    pub(crate) rows: Vec<FrequencyRow>,
    pub(crate) stats: SummaryStats,
}

impl Report {
    pub fn new(sample: &Sample) -> Result<Self, Error> {
        let stats = SummaryStats::new(sample);
        let bins = Bins::from_stats(&stats)?;
        let counts = bins.counts(sample.as_slice())?;

        debug!(
            "n: {} range: {} classes: {} width: {}",
            stats.n(),
            stats.range(),
            stats.classes(),
            stats.width()
        );

        let kept: Vec<(Bin, u64)> = bins
            .as_slice()
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(bin, count)| (*bin, count))
            .collect();

        let total = stats.n() as u64;

        let mut probabilities: Vec<Probability> = kept
            .iter()
            .map(|(_, count)| Probability::ratio(*count, total))
            .collect();

        reconcile(&mut probabilities);

        let mut running = 0;
        let cumulative: Vec<Probability> = probabilities
            .iter()
            .map(|p| {
                running += p.hundredths();
                Probability::from_hundredths(running)
            })
            .collect();

        let intervals = RandomInterval::from_cumulative(&cumulative);

        let rows = kept
            .into_iter()
            .zip(probabilities)
            .zip(cumulative)
            .zip(intervals)
            .enumerate()
            .map(
                |(i, ((((bin, frequency), probability), cumulative), interval))| FrequencyRow {
                    number: i + 1,
                    bin,
                    frequency,
                    probability,
                    cumulative,
                    interval,
                },
            )
            .collect();

        let report = Self { rows, stats };
        report.check()?;

        Ok(report)
    }

    /// Verifies the invariants of a finished table.
    fn check(&self) -> Result<(), Error> {
        let frequencies: u64 = self.rows.iter().map(|r| r.frequency).sum();
        if frequencies != self.stats.n() as u64 {
            return Err(Error::Inconsistent("frequencies do not sum to n"));
        }

        let probabilities: u32 = self.rows.iter().map(|r| r.probability.hundredths()).sum();
        if probabilities != ONE {
            return Err(Error::Inconsistent("probabilities do not sum to one"));
        }

        let mut expected_lower = 1;
        for row in &self.rows {
            if row.interval.lower() != expected_lower {
                return Err(Error::Inconsistent("random-number intervals have a gap"));
            }
            expected_lower = row.interval.upper() + 1;
        }

        match self.rows.last() {
            Some(row) if row.interval.upper() == DRAW_MAX && row.cumulative.hundredths() == ONE => {
                Ok(())
            }
            _ => Err(Error::Inconsistent("random-number intervals do not end at 100")),
        }
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    /// Returns the row whose random-number interval holds the draw, or `None`
    /// if the draw is outside of `1..=100`.
    pub fn lookup(&self, draw: u32) -> Option<&FrequencyRow> {
        // intervals are ascending, so the first upper bound at or above the
        // draw identifies the row
        let index = self.rows.partition_point(|r| r.interval.upper() < draw);
        self.rows.get(index).filter(|r| r.interval.contains(draw))
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a FrequencyRow;
    type IntoIter = core::slice::Iter<'a, FrequencyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builds a report from raw observations, dropping `NaN` entries first.
pub fn distribute(values: &[f64]) -> Result<Report, Error> {
    let sample = Sample::from_iter_lossy(values.iter().copied())?;
    Report::new(&sample)
}
