use thiserror::Error;

/// A rejected call: the named precondition did not hold for the given value(s).
///
/// Produced by the functions in [`check`](crate::check) and returned unchanged by every
/// formula that runs them. Nothing is computed once one of these has been raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid probability {0}; must be between 0 and 1, inclusive")]
    ProbabilityOutOfRange(f64),
    #[error("Invalid percentile {0}; must be between 0 and 100, inclusive")]
    PercentileOutOfRange(f64),
    #[error("Cannot divide by zero")]
    Zero,
    #[error("Cannot have {r} objects in subset of {n} objects")]
    TooManyItems { n: i64, r: i64 },
    #[error("Cannot have {y} successes in {n} trials")]
    TooManySuccesses { n: i64, y: i64 },
    #[error("Number of trials cannot be negative, got {0}")]
    NegativeTrials(i64),
    #[error("Number of successes cannot be negative, got {0}")]
    NegativeSuccesses(i64),
    #[error("Number of items cannot be negative, got {0}")]
    NegativeItems(i64),
    #[error("Occurrence rate cannot be negative, got {0}")]
    NegativeOccurrenceRate(f64),
    #[error("Number of trials cannot be zero")]
    ZeroTrials,
    #[error("Number of successes cannot be zero")]
    ZeroSuccesses,
    #[error("Arrays must be of equal length, got {left} and {right}")]
    UnequalLengths { left: usize, right: usize },
    #[error("Collection must have length of at least {min}, got {len}")]
    NotBigEnough { len: usize, min: usize },
    #[error("Maximum of range must be greater than or equal to minimum (min = {min}, max = {max})")]
    BadRange { min: f64, max: f64 },
    #[error("Maximum of distribution must be strictly greater than minimum (min = {min}, max = {max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("Total probability must be equal to 1, got {0}")]
    TotalProbability(f64),
    #[error("Rows in probability table must be of equal length (row {row} has {len}, expected {expected})")]
    RaggedTable {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{name} must be in range of table (between 0 and {last}, inclusive), got {index}")]
    IndexOutOfRange {
        name: &'static str,
        index: i64,
        last: i64,
    },
}

pub type Result<T> = ::std::result::Result<T, ValidationError>;
