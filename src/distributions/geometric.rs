//! Trial number `Y` on which the first success happens, with success probability `p`

use crate::check;
use crate::distributions::pow;
use crate::error::Result;

fn validate(y: i64, p: f64) -> Result<()> {
    check::non_negative_trials(y)?;
    check::non_zero_trials(y)?;
    check::probability(p)
}

/// `P(Y = y)`, the first success happens on trial `y`
pub fn exactly(y: i64, p: f64) -> Result<f64> {
    validate(y, p)?;

    let probability = pow(1. - p, y - 1) * p;
    trace!("geometric(p = {}): P(Y = {}) = {}", p, y, probability);
    Ok(probability)
}

/// `P(Y >= y)`, the first `y - 1` trials all fail
pub fn at_least(y: i64, p: f64) -> Result<f64> {
    validate(y, p)?;

    Ok(pow(1. - p, y - 1))
}

/// `P(Y <= y)`, at least one of the first `y` trials succeeds
pub fn at_most(y: i64, p: f64) -> Result<f64> {
    validate(y, p)?;

    Ok(1. - pow(1. - p, y))
}

/// `E(Y) = 1 / p`
pub fn expected_value(p: f64) -> Result<f64> {
    check::probability(p)?;
    check::non_zero(p)?;

    Ok(1. / p)
}

/// `V(Y) = (1 - p) / p^2`
pub fn variance(p: f64) -> Result<f64> {
    check::probability(p)?;
    check::non_zero(p)?;

    Ok((1. - p) / (p * p))
}
