//! Number of events `Y` in an interval, for a process with mean rate `lambda` per interval

use crate::check;
use crate::combinatorics;
use crate::distributions::{approximate, fits, ln, ln_pow, pow};
use crate::error::Result;

fn validate(lambda: f64, y: i64) -> Result<()> {
    check::non_negative_rate(lambda)?;
    check::non_negative_successes(y)
}

/// `P(Y = y) = lambda^y e^(-lambda) / y!`
pub fn exactly(lambda: f64, y: i64) -> Result<f64> {
    validate(lambda, y)?;

    let arrangements = combinatorics::factorial(y)?;
    let direct = pow(lambda, y) / approximate(&arrangements) * (-lambda).exp();
    // `lambda^y` and `y!` overflow, and `e^-lambda` underflows, long before the probability does
    let probability = if fits(&arrangements) && direct.is_normal() {
        direct
    } else {
        (ln_pow(lambda, y) - ln(&arrangements) - lambda).exp()
    };
    trace!("poisson(lambda = {}): P(Y = {}) = {}", lambda, y, probability);
    Ok(probability)
}

/// `P(Y >= y) = 1 - P(Y < y)`
pub fn at_least(lambda: f64, y: i64) -> Result<f64> {
    validate(lambda, y)?;

    let below = (0..y).map(|i| exactly(lambda, i)).sum::<Result<f64>>()?;
    Ok(1. - below)
}

/// `P(Y <= y)`
pub fn at_most(lambda: f64, y: i64) -> Result<f64> {
    validate(lambda, y)?;

    (0..=y).map(|i| exactly(lambda, i)).sum()
}

/// `E(Y) = lambda`
pub fn expected_value(lambda: f64) -> Result<f64> {
    check::non_negative_rate(lambda)?;

    Ok(lambda)
}

/// `V(Y) = lambda`
pub fn variance(lambda: f64) -> Result<f64> {
    check::non_negative_rate(lambda)?;

    Ok(lambda)
}
