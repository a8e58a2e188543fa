//! Domain preconditions shared by every formula in the crate.
//!
//! Each function either returns `Ok(())` or the [`ValidationError`] naming the violated
//! precondition. None of them retain state, so the same input always yields the same outcome.
//!
//! Callers run the checks relevant to their formula in this order: count validity, then
//! range/ordering validity, then derived values (such as a denominator). Later checks assume the
//! earlier ones have passed and do not re-verify them.

use crate::error::{Result, ValidationError};

/// Tolerance allowed when checking that a joint probability table sums to one
pub const TOTAL_PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Fails unless `0 <= p <= 1`. `NaN` is rejected.
pub fn probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ValidationError::ProbabilityOutOfRange(p))
    }
}

/// Fails unless `0 <= p <= 100`. `NaN` is rejected.
pub fn percentile(p: f64) -> Result<()> {
    if (0.0..=100.0).contains(&p) {
        Ok(())
    } else {
        Err(ValidationError::PercentileOutOfRange(p))
    }
}

/// Fails if `x` is exactly zero. Run before using `x` as a divisor.
pub fn non_zero(x: f64) -> Result<()> {
    if x == 0.0 {
        Err(ValidationError::Zero)
    } else {
        Ok(())
    }
}

/// Fails if a subset of `r` items cannot be taken from a set of `n` items (`r > n`)
pub fn subset_size(n: i64, r: i64) -> Result<()> {
    if r > n {
        Err(ValidationError::TooManyItems { n, r })
    } else {
        Ok(())
    }
}

/// Fails if `y` successes cannot happen in `n` trials (`y > n`)
pub fn successes_within_trials(n: i64, y: i64) -> Result<()> {
    if y > n {
        Err(ValidationError::TooManySuccesses { n, y })
    } else {
        Ok(())
    }
}

pub fn non_negative_trials(n: i64) -> Result<()> {
    if n < 0 {
        Err(ValidationError::NegativeTrials(n))
    } else {
        Ok(())
    }
}

pub fn non_negative_successes(n: i64) -> Result<()> {
    if n < 0 {
        Err(ValidationError::NegativeSuccesses(n))
    } else {
        Ok(())
    }
}

pub fn non_negative_items(n: i64) -> Result<()> {
    if n < 0 {
        Err(ValidationError::NegativeItems(n))
    } else {
        Ok(())
    }
}

/// Fails if the mean number of occurrences per interval is negative
pub fn non_negative_rate(lambda: f64) -> Result<()> {
    if lambda < 0.0 {
        Err(ValidationError::NegativeOccurrenceRate(lambda))
    } else {
        Ok(())
    }
}

pub fn non_zero_trials(n: i64) -> Result<()> {
    if n == 0 {
        Err(ValidationError::ZeroTrials)
    } else {
        Ok(())
    }
}

pub fn non_zero_successes(n: i64) -> Result<()> {
    if n == 0 {
        Err(ValidationError::ZeroSuccesses)
    } else {
        Ok(())
    }
}

/// Fails if the two sequences differ in length
pub fn equal_lengths<A, B>(left: &[A], right: &[B]) -> Result<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(ValidationError::UnequalLengths {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Fails if `xs` holds fewer than `min` elements
pub fn min_len<A>(xs: &[A], min: usize) -> Result<()> {
    if xs.len() < min {
        Err(ValidationError::NotBigEnough { len: xs.len(), min })
    } else {
        Ok(())
    }
}

/// Whether a range may have zero width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// `min <= max` is required
    MayBeEmpty,
    /// `min < max` is required
    Positive,
}

/// Fails if `[min, max]` is not a valid range of the given `width` kind
pub fn range(min: f64, max: f64, width: Width) -> Result<()> {
    match width {
        Width::MayBeEmpty if max < min => Err(ValidationError::BadRange { min, max }),
        Width::Positive if max <= min => Err(ValidationError::EmptyRange { min, max }),
        _ => Ok(()),
    }
}

/// Fails unless `table` is a bivariate probability function: every entry is a probability, the
/// entries sum to one within [`TOTAL_PROBABILITY_TOLERANCE`] and all rows have the same length.
pub fn joint_table<R>(table: &[R]) -> Result<()>
where
    R: AsRef<[f64]>,
{
    let mut total = 0.0;
    for row in table {
        for &p in row.as_ref() {
            probability(p)?;
            total += p;
        }
    }

    if (total - 1.0).abs() > TOTAL_PROBABILITY_TOLERANCE {
        return Err(ValidationError::TotalProbability(total));
    }

    let expected = table[0].as_ref().len();
    match table
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != expected)
    {
        Some((row, r)) => Err(ValidationError::RaggedTable {
            row,
            len: r.as_ref().len(),
            expected,
        }),
        None => Ok(()),
    }
}

/// Fails if `(y1, y2)` does not address a cell of `table`. Columns are bounded by the first row.
pub fn table_indices<R>(table: &[R], y1: i64, y2: i64) -> Result<()>
where
    R: AsRef<[f64]>,
{
    fn in_bounds(name: &'static str, index: i64, len: usize) -> Result<()> {
        let last = len as i64 - 1;
        if index < 0 || index > last {
            Err(ValidationError::IndexOutOfRange { name, index, last })
        } else {
            Ok(())
        }
    }

    in_bounds("y1", y1, table.len())?;
    in_bounds("y2", y2, table[0].as_ref().len())
}
