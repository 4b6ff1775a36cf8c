//! Derived statistics over recorded results.

use crate::model::rounding::round_to;

/// Aggregate statistics over the numeric results in the ledger.
///
/// The mean is rounded to the precision in force when the statistics are
/// computed; max and min are the raw stored values (which were already
/// rounded at execution time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Mean of all recorded results, rounded to the current precision.
    pub mean: f64,
    /// Largest recorded result.
    pub max: f64,
    /// Smallest recorded result.
    pub min: f64,
}

impl Statistics {
    /// Compute statistics over `results`, or `None` when empty.
    pub fn from_results<I>(results: I, precision: u8) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = results.into_iter();
        let first = iter.next()?;

        let (mut sum, mut count, mut max, mut min) = (first, 1u32, first, first);
        for value in iter {
            sum += value;
            count += 1;
            max = max.max(value);
            min = min.min(value);
        }

        Some(Self {
            mean: round_to(sum / f64::from(count), precision),
            max,
            min,
        })
    }
}
