//! Continuous uniform distribution on `[theta1, theta2]`

use crate::check::{self, Width};
use crate::error::Result;

/// `P(min <= Y <= max)`
///
/// The part of `[min, max]` lying outside of `[theta1, theta2]` contributes nothing, a range that
/// misses the distribution entirely has probability zero.
pub fn between(theta1: f64, theta2: f64, min: f64, max: f64) -> Result<f64> {
    check::range(theta1, theta2, Width::Positive)?;
    check::range(min, max, Width::MayBeEmpty)?;

    let lower = theta1.max(min);
    let upper = theta2.min(max);
    let probability = ((upper - lower) / (theta2 - theta1)).max(0.);
    trace!(
        "uniform({}, {}): P({} <= Y <= {}) = {}",
        theta1,
        theta2,
        min,
        max,
        probability
    );
    Ok(probability)
}

/// `P(Y >= min)`
pub fn at_least(theta1: f64, theta2: f64, min: f64) -> Result<f64> {
    check::range(theta1, theta2, Width::Positive)?;
    check::range(min, theta2, Width::MayBeEmpty)?;

    between(theta1, theta2, min, theta2)
}

/// `P(Y <= max)`
pub fn at_most(theta1: f64, theta2: f64, max: f64) -> Result<f64> {
    check::range(theta1, theta2, Width::Positive)?;
    check::range(theta1, max, Width::MayBeEmpty)?;

    between(theta1, theta2, theta1, max)
}

/// `E(Y) = (theta1 + theta2) / 2`
pub fn expected_value(theta1: f64, theta2: f64) -> Result<f64> {
    check::range(theta1, theta2, Width::Positive)?;

    Ok((theta1 + theta2) / 2.)
}

/// `V(Y) = (theta2 - theta1)^2 / 12`
pub fn variance(theta1: f64, theta2: f64) -> Result<f64> {
    check::range(theta1, theta2, Width::Positive)?;

    Ok((theta2 - theta1).powi(2) / 12.)
}
