//! Draws random numbers and maps them onto the rows of a frequency table.

use freqdist::{FrequencyRow, Report, DRAW_MAX, DRAW_MIN};
use rand::Rng;

/// A single simulated observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Draw<'a> {
    pub number: u32,
    pub row: &'a FrequencyRow,
}

/// Draws `count` random numbers in `1..=100` and looks up the row each one
/// falls into.
pub fn draws<'a, R: Rng>(report: &'a Report, rng: &mut R, count: usize) -> Vec<Draw<'a>> {
    (0..count)
        .filter_map(|_| {
            let number = rng.gen_range(DRAW_MIN..=DRAW_MAX);
            report.lookup(number).map(|row| Draw { number, row })
        })
        .collect()
}

/// How many draws landed in each row, indexed like the rows of the report.
pub fn tally(report: &Report, draws: &[Draw<'_>]) -> Vec<u64> {
    let mut counts = vec![0; report.rows().len()];
    for draw in draws {
        counts[draw.row.number() - 1] += 1;
    }
    counts
}
