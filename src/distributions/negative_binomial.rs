//! Trial number `Y` on which the `r`-th success happens, with success probability `p`

use crate::check;
use crate::combinatorics;
use crate::distributions::weighted;
use crate::error::Result;

fn validate(y: i64, r: i64, p: f64) -> Result<()> {
    check::non_negative_trials(y)?;
    check::non_negative_successes(r)?;
    check::non_zero_successes(r)?;
    check::probability(p)?;
    check::successes_within_trials(y, r)
}

/// `P(Y = y)`, the `r`-th success happens on trial `y`
pub fn exactly(y: i64, r: i64, p: f64) -> Result<f64> {
    validate(y, r, p)?;

    let choices = combinatorics::combinations(y - 1, r - 1)?;
    let probability = weighted(&choices, (p, r), (1. - p, y - r));
    trace!(
        "negative_binomial(r = {}, p = {}): P(Y = {}) = {}",
        r,
        p,
        y,
        probability
    );
    Ok(probability)
}

/// `P(Y >= y) = 1 - P(Y < y)`
pub fn at_least(y: i64, r: i64, p: f64) -> Result<f64> {
    validate(y, r, p)?;

    let before = (r..y).map(|i| exactly(i, r, p)).sum::<Result<f64>>()?;
    Ok(1. - before)
}

/// `P(Y <= y)`
pub fn at_most(y: i64, r: i64, p: f64) -> Result<f64> {
    validate(y, r, p)?;

    (r..=y).map(|i| exactly(i, r, p)).sum()
}

fn validate_moments(r: i64, p: f64) -> Result<()> {
    check::non_negative_successes(r)?;
    check::non_zero_successes(r)?;
    check::probability(p)?;
    check::non_zero(p)
}

/// `E(Y) = r / p`
pub fn expected_value(r: i64, p: f64) -> Result<f64> {
    validate_moments(r, p)?;

    Ok(r as f64 / p)
}

/// `V(Y) = r(1 - p) / p^2`
pub fn variance(r: i64, p: f64) -> Result<f64> {
    validate_moments(r, p)?;

    Ok(r as f64 * (1. - p) / (p * p))
}

#[cfg(test)]
mod test {
    use approx::{abs_diff_eq, relative_eq};
    use quickcheck::quickcheck;

    use super::*;
    use crate::distributions::geometric;
    use crate::error::ValidationError;

    #[test]
    fn third_success_on_fifth_trial() {
        // C(4, 2) 0.5^3 0.5^2
        assert!(relative_eq!(
            exactly(5, 3, 0.5).unwrap(),
            6. / 32.,
            max_relative = 1e-12
        ));
        // 1/8 + 3/16 + 6/32
        assert!(relative_eq!(
            at_most(5, 3, 0.5).unwrap(),
            0.5,
            max_relative = 1e-12
        ));
        assert!(relative_eq!(
            at_least(5, 3, 0.5).unwrap(),
            1. - 0.125 - 0.1875,
            max_relative = 1e-12
        ));
        assert_eq!(at_least(3, 3, 0.5), Ok(1.));
        assert_eq!(expected_value(3, 0.5), Ok(6.));
        assert_eq!(variance(3, 0.5), Ok(6.));
    }

    #[test]
    fn rejects() {
        assert_eq!(exactly(5, 0, 0.5), Err(ValidationError::ZeroSuccesses));
        assert_eq!(exactly(-5, 2, 0.5), Err(ValidationError::NegativeTrials(-5)));
        assert_eq!(exactly(5, -2, 0.5), Err(ValidationError::NegativeSuccesses(-2)));
        assert_eq!(
            at_most(2, 3, 0.5),
            Err(ValidationError::TooManySuccesses { n: 2, y: 3 })
        );
        assert_eq!(
            at_least(4, 3, 2.),
            Err(ValidationError::ProbabilityOutOfRange(2.))
        );
        assert_eq!(expected_value(2, 0.), Err(ValidationError::Zero));
        assert_eq!(variance(0, 0.5), Err(ValidationError::ZeroSuccesses));
    }

    quickcheck! {
        // With r = 1 the r-th success is the first success
        fn first_success_is_geometric(y: u8, p: u8) -> bool {
            let y = i64::from(y % 100) + 1;
            let p = f64::from(p) / 255.;

            let negative = exactly(y, 1, p).unwrap();
            let geometric = geometric::exactly(y, p).unwrap();
            abs_diff_eq!(negative, geometric, epsilon = 1e-12)
        }
    }
}
