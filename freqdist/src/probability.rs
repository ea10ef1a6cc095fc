//! Probabilities held at two decimal places.

use core::fmt;

/// Hundredths in a probability of one.
pub const ONE: u32 = 100;

/// A probability rounded to two decimal places, stored as an integer count
/// of hundredths so that sums and corrections are exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-serialize", serde(into = "f64"))]
pub struct Probability(pub(crate) u32);

impl Probability {
    /// Returns `count / total` rounded to two decimals. Ties round to the even
    /// hundredth.
    ///
    /// # Panics
    /// Panics if `total` is zero.
    pub fn ratio(count: u64, total: u64) -> Self {
        let scaled = count as u128 * ONE as u128;
        let total = total as u128;
        let quotient = scaled / total;
        let remainder = scaled % total;

        let round_up = match (2 * remainder).cmp(&total) {
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Equal => quotient % 2 == 1,
            core::cmp::Ordering::Less => false,
        };

        Self((quotient + round_up as u128) as u32)
    }

    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / ONE as f64
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.as_f64()
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / ONE, self.0 % ONE)
    }
}

/// Pushes the difference between one and the sum of the probabilities onto
/// the largest probability, the first one on ties.
///
/// An excess larger than that probability takes it down to zero and the rest
/// is removed from the next largest, in the same order.
pub(crate) fn reconcile(probabilities: &mut [Probability]) {
    let sum: i64 = probabilities.iter().map(|p| p.0 as i64).sum();
    let deficit = ONE as i64 - sum;

    if deficit == 0 {
        return;
    }

    // largest first, a stable sort keeps the earlier row ahead on ties
    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|a, b| probabilities[*b].cmp(&probabilities[*a]));

    if deficit > 0 {
        if let Some(index) = order.first() {
            probabilities[*index].0 += deficit as u32;
        }
        return;
    }

    let mut excess = deficit.unsigned_abs() as u32;
    for index in order {
        if excess == 0 {
            break;
        }
        let taken = excess.min(probabilities[index].0);
        probabilities[index].0 -= taken;
        excess -= taken;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio() {
        assert_eq!(Probability::ratio(4, 10).hundredths(), 40);
        assert_eq!(Probability::ratio(1, 3).hundredths(), 33);
        assert_eq!(Probability::ratio(2, 3).hundredths(), 67);
        assert_eq!(Probability::ratio(10, 10).hundredths(), 100);
        assert_eq!(Probability::ratio(0, 10).hundredths(), 0);
    }

    #[test]
    // exact halves go to the even hundredth
    fn ties_to_even() {
        assert_eq!(Probability::ratio(1, 8).hundredths(), 12);
        assert_eq!(Probability::ratio(3, 8).hundredths(), 38);
        assert_eq!(Probability::ratio(1, 200).hundredths(), 0);
        assert_eq!(Probability::ratio(3, 200).hundredths(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Probability(5).to_string(), "0.05");
        assert_eq!(Probability(40).to_string(), "0.40");
        assert_eq!(Probability(100).to_string(), "1.00");
        assert_eq!(Probability(67).as_f64(), 0.67);
    }

    #[test]
    fn reconcile_short() {
        // 1/3 each rounds to 0.33, one hundredth is missing
        let mut p = vec![Probability(33), Probability(33), Probability(33)];
        reconcile(&mut p);
        assert_eq!(p, vec![Probability(34), Probability(33), Probability(33)]);
    }

    #[test]
    fn reconcile_excess() {
        let mut p = vec![Probability(17), Probability(67), Probability(17)];
        reconcile(&mut p);
        assert_eq!(p, vec![Probability(17), Probability(66), Probability(17)]);
    }

    #[test]
    fn reconcile_balanced() {
        let mut p = vec![Probability(40), Probability(60)];
        reconcile(&mut p);
        assert_eq!(p, vec![Probability(40), Probability(60)]);
    }

    #[test]
    // twelve rows at 0.10 overshoot by more than the largest row, so the
    // excess spills onto the following rows
    fn reconcile_spills() {
        let mut p = vec![Probability(10); 12];
        reconcile(&mut p);
        let mut expected = vec![Probability(0), Probability(0)];
        expected.extend(vec![Probability(10); 10]);
        assert_eq!(p, expected);
    }

    #[test]
    // spilling follows size, not position
    fn reconcile_spills_largest_first() {
        let mut p = vec![
            Probability(2),
            Probability(9),
            Probability(9),
            Probability(90),
            Probability(3),
        ];
        // sum 113, excess 13 fits in the largest row
        reconcile(&mut p);
        assert_eq!(p[3], Probability(77));

        let mut p = vec![Probability(5)];
        p.extend(vec![Probability(7); 15]);
        // sum 110, the first 7 goes to zero and the second gives up 3, the
        // smaller leading row is left alone
        reconcile(&mut p);
        assert_eq!(p[0], Probability(5));
        assert_eq!(p[1], Probability(0));
        assert_eq!(p[2], Probability(4));
        assert_eq!(p[3], Probability(7));
        assert_eq!(p.iter().map(|p| p.0).sum::<u32>(), 100);
    }
}
