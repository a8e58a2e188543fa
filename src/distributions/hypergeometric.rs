//! Number of items `Y` from a subset of size `r` among `n` items drawn without replacement from
//! a population of `population` items

use crate::check;
use crate::combinatorics;
use crate::distributions::ratio;
use crate::error::Result;

fn validate(population: i64, n: i64, r: i64) -> Result<()> {
    check::non_negative_items(population)?;
    check::non_negative_items(n)?;
    check::non_negative_items(r)?;
    check::subset_size(population, n)?;
    check::subset_size(population, r)
}

/// `P(Y = y) = C(r, y) C(population - r, n - y) / C(population, n)`
///
/// Values of `y` that cannot occur (more than `r` subset items, or more than
/// `population - r` other items) have probability zero.
pub fn exactly(population: i64, n: i64, r: i64, y: i64) -> Result<f64> {
    validate(population, n, r)?;
    check::non_negative_successes(y)?;
    check::subset_size(n, y)?;

    if y > r || n - y > population - r {
        trace!(
            "hypergeometric(N = {}, n = {}, r = {}): P(Y = {}) = 0, outside the support",
            population,
            n,
            r,
            y
        );
        return Ok(0.);
    }

    let favourable = combinatorics::combinations(r, y)?
        * combinatorics::combinations(population - r, n - y)?;
    let total = combinatorics::combinations(population, n)?;
    let probability = ratio(&favourable, &total);
    trace!(
        "hypergeometric(N = {}, n = {}, r = {}): P(Y = {}) = {}",
        population,
        n,
        r,
        y,
        probability
    );
    Ok(probability)
}

/// `P(Y >= y)`
pub fn at_least(population: i64, n: i64, r: i64, y: i64) -> Result<f64> {
    validate(population, n, r)?;
    check::non_negative_successes(y)?;
    check::subset_size(n, y)?;

    (y..=n.min(r))
        .map(|i| exactly(population, n, r, i))
        .sum()
}

/// `P(Y <= y)`
pub fn at_most(population: i64, n: i64, r: i64, y: i64) -> Result<f64> {
    validate(population, n, r)?;
    check::non_negative_successes(y)?;
    check::subset_size(n, y)?;

    (0..=y).map(|i| exactly(population, n, r, i)).sum()
}

/// `E(Y) = n r / population`
pub fn expected_value(population: i64, n: i64, r: i64) -> Result<f64> {
    validate(population, n, r)?;
    check::non_zero(population as f64)?;

    Ok(n as f64 * r as f64 / population as f64)
}

/// `V(Y) = n (r / N) ((N - r) / N) ((N - n) / (N - 1))` where `N = population`
pub fn variance(population: i64, n: i64, r: i64) -> Result<f64> {
    validate(population, n, r)?;
    check::non_zero(population as f64)?;
    check::non_zero((population - 1) as f64)?;

    let (big_n, n, r) = (population as f64, n as f64, r as f64);
    Ok(n * (r / big_n) * ((big_n - r) / big_n) * ((big_n - n) / (big_n - 1.)))
}
