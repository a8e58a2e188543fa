//! Tchebysheff's theorem: bounds on the probability of deviating from the mean
//!
//! For any distribution with standard deviation `sigma`, `P(|Y - mu| < k sigma) >= 1 - 1 / k^2`.

use crate::check;
use crate::error::Result;

fn k(std_dev: f64, max_dev: f64) -> Result<f64> {
    check::non_zero(std_dev)?;
    check::non_zero(max_dev)?;

    Ok(max_dev / std_dev)
}

/// Lower bound on the probability of a value lying within `max_dev` of the mean
pub fn within_range(std_dev: f64, max_dev: f64) -> Result<f64> {
    let k = k(std_dev, max_dev)?;

    Ok(1. - 1. / k / k)
}

/// Upper bound on the probability of a value lying `max_dev` or further from the mean
pub fn outside_range(std_dev: f64, max_dev: f64) -> Result<f64> {
    let k = k(std_dev, max_dev)?;

    Ok(1. / k / k)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn two_standard_deviations() {
        assert_eq!(within_range(2., 4.), Ok(0.75));
        assert_eq!(outside_range(2., 4.), Ok(0.25));
        assert_eq!(within_range(1., 1.), Ok(0.));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(within_range(0., 4.), Err(ValidationError::Zero));
        assert_eq!(outside_range(2., 0.), Err(ValidationError::Zero));
    }
}
