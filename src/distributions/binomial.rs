//! Number of successes `Y` in `n` independent trials with success probability `p`

use crate::check;
use crate::combinatorics;
use crate::distributions::weighted;
use crate::error::Result;

fn validate(n: i64, y: i64, p: f64) -> Result<()> {
    check::non_negative_trials(n)?;
    check::non_negative_successes(y)?;
    check::probability(p)?;
    check::successes_within_trials(n, y)
}

/// `P(Y = y)`
pub fn exactly(n: i64, y: i64, p: f64) -> Result<f64> {
    validate(n, y, p)?;

    let choices = combinatorics::combinations(n, y)?;
    let probability = weighted(&choices, (p, y), (1. - p, n - y));
    trace!("binomial(n = {}, p = {}): P(Y = {}) = {}", n, p, y, probability);
    Ok(probability)
}

/// `P(Y >= y)`
pub fn at_least(n: i64, y: i64, p: f64) -> Result<f64> {
    validate(n, y, p)?;

    (y..=n).map(|i| exactly(n, i, p)).sum()
}

/// `P(Y <= y)`
pub fn at_most(n: i64, y: i64, p: f64) -> Result<f64> {
    validate(n, y, p)?;

    (0..=y).map(|i| exactly(n, i, p)).sum()
}

/// `E(Y) = np`
pub fn expected_value(n: i64, p: f64) -> Result<f64> {
    check::non_negative_trials(n)?;
    check::probability(p)?;

    Ok(n as f64 * p)
}

/// `V(Y) = np(1 - p)`
pub fn variance(n: i64, p: f64) -> Result<f64> {
    check::non_negative_trials(n)?;
    check::probability(p)?;

    Ok(n as f64 * p * (1. - p))
}
