//! Probability formulas for the textbook distributions
//!
//! Every function validates its parameters through [`check`](crate::check) before computing and
//! returns the first failure unchanged. Discrete distributions expose the probability of exactly,
//! at least and at most `y` outcomes, along with the expected value and variance.

pub mod binomial;
pub mod geometric;
pub mod hypergeometric;
pub mod negative_binomial;
pub mod poisson;
pub mod uniform;

use std::f64::consts::LN_2;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Counts below `2^DIRECT_BITS` are multiplied as plain `f64`s, larger ones go through logarithms
const DIRECT_BITS: u64 = 512;

/// Converts an exact count into the nearest `f64`, saturating to infinity
fn approximate(count: &BigUint) -> f64 {
    count.to_f64().unwrap_or(::std::f64::INFINITY)
}

/// Whether `count` is small enough to enter `f64` arithmetic directly
fn fits(count: &BigUint) -> bool {
    count.bits() <= DIRECT_BITS
}

/// Natural logarithm of an exact count, `ln(0) = -inf`
fn ln(count: &BigUint) -> f64 {
    let shift = count.bits().saturating_sub(64);
    let top = approximate(&(count >> shift));

    top.ln() + shift as f64 * LN_2
}

/// `x^y` for a non-negative integer exponent. `0^0 = 1`
fn pow(x: f64, y: i64) -> f64 {
    x.powf(y as f64)
}

/// `y ln(x)`, with `0 ln(0) = 0` to match `0^0 = 1`
fn ln_pow(x: f64, y: i64) -> f64 {
    if y == 0 {
        0.
    } else {
        y as f64 * x.ln()
    }
}

/// `count x^a z^b`
///
/// Past `2^DIRECT_BITS` the count alone would overflow (or the powers underflow) before the
/// product comes back into range, so the sum of logarithms is exponentiated instead.
fn weighted(count: &BigUint, (x, a): (f64, i64), (z, b): (f64, i64)) -> f64 {
    if fits(count) {
        approximate(count) * pow(x, a) * pow(z, b)
    } else {
        (ln(count) + ln_pow(x, a) + ln_pow(z, b)).exp()
    }
}

/// `numerator / denominator` as the nearest `f64`, without converting either count on its own
fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if numerator.is_zero() {
        return 0.;
    }

    // scale the integer quotient to 64 significant bits
    let shift = denominator.bits() as i64 - numerator.bits() as i64 + 64;
    let quotient = if shift >= 0 {
        (numerator << shift as u64) / denominator
    } else {
        numerator / (denominator << (-shift) as u64)
    };

    scale(approximate(&quotient), -shift)
}

/// `x 2^exponent`, in two steps so neither power of two leaves the `f64` range early
fn scale(x: f64, exponent: i64) -> f64 {
    let half = exponent / 2;

    x * 2f64.powi(half as i32) * 2f64.powi((exponent - half) as i32)
}

#[cfg(test)]
mod test {
    use approx::relative_eq;
    use num_bigint::BigUint;

    use super::{ln, ratio, weighted};
    use crate::combinatorics;

    #[test]
    fn ratio_of_counts_past_f64() {
        // C(2000, 1000) alone is far beyond `f64::MAX`
        let big = combinatorics::combinations(2000, 1000).unwrap();
        let twice = &big * BigUint::from(2u32);

        assert_eq!(ratio(&big, &twice), 0.5);
        assert_eq!(ratio(&twice, &big), 2.);
        assert_eq!(ratio(&BigUint::from(0u32), &big), 0.);
        assert!(relative_eq!(
            ratio(&BigUint::from(1u32), &BigUint::from(3u32)),
            1. / 3.,
            max_relative = 1e-15
        ));
    }

    #[test]
    fn logarithm_of_counts() {
        assert_eq!(ln(&BigUint::from(1u32)), 0.);
        assert!(relative_eq!(
            ln(&BigUint::from(1u64 << 40)),
            40. * std::f64::consts::LN_2,
            max_relative = 1e-15
        ));

        // 1000! has 2568 digits
        let ln_factorial = ln(&combinatorics::factorial(1000).unwrap());
        assert!(relative_eq!(
            ln_factorial / std::f64::consts::LN_10,
            2567.6046,
            max_relative = 1e-7
        ));
    }

    #[test]
    fn weighted_agrees_across_paths() {
        let small = combinatorics::combinations(40, 20).unwrap();
        let direct = weighted(&small, (0.5, 20), (0.5, 20));
        let logs = (ln(&small) + 40. * 0.5f64.ln()).exp();

        assert!(relative_eq!(direct, logs, max_relative = 1e-12));
    }
}
