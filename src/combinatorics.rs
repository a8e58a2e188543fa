//! Exact counts of arrangements
//!
//! Factorials outgrow 64-bit integers past `20!`, so every count is an arbitrary precision
//! [`BigUint`]. No floating point value is involved at any step.

use num_bigint::BigUint;
use num_traits::One;

use crate::check;
use crate::error::Result;

/// Returns `n!`
///
/// `0! = 1`.
///
/// - Time: `O(n)` multiplications
pub fn factorial(n: i64) -> Result<BigUint> {
    check::non_negative_items(n)?;

    let count = falling(n, n);
    trace!("{}! = {}", n, count);
    Ok(count)
}

/// Returns the number of unordered subsets of `r` objects taken from a set of `n` objects,
/// `n! / (r! (n - r)!)`
pub fn combinations(n: i64, r: i64) -> Result<BigUint> {
    check::non_negative_items(n)?;
    check::non_negative_items(r)?;
    check::subset_size(n, r)?;

    // C(n, r) = C(n, n - r), keep the shorter product
    let k = r.min(n - r);
    let count = falling(n, k) / falling(k, k);
    trace!("C({}, {}) = {}", n, r, count);
    Ok(count)
}

/// Returns the number of ordered arrangements of `r` objects taken from a set of `n` objects,
/// `n! / (n - r)!`
pub fn permutations(n: i64, r: i64) -> Result<BigUint> {
    check::non_negative_items(n)?;
    check::non_negative_items(r)?;
    check::subset_size(n, r)?;

    let count = falling(n, r);
    trace!("P({}, {}) = {}", n, r, count);
    Ok(count)
}

/// `n (n - 1) ... (n - k + 1)`, the product of the `k` largest factors of `n!`
///
/// Assumes `0 <= k <= n`.
fn falling(n: i64, k: i64) -> BigUint {
    ((n - k + 1).max(2)..=n).fold(BigUint::one(), |acc, i| acc * (i as u64))
}
