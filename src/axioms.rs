//! Probabilities of combined events derived from the axioms of probability
//!
//! Inputs are probabilities and must lie in `[0, 1]`. Results are plain `f64` arithmetic and carry
//! its rounding error.

use crate::check;
use crate::error::Result;

/// Tolerance used when testing two events for independence
pub const INDEPENDENCE_TOLERANCE: f64 = 1e-9;

/// `P(A ∩ B) = P(A) P(B | A)`
pub fn dependent_intersection(p_a: f64, p_b_given_a: f64) -> Result<f64> {
    check::probability(p_a)?;
    check::probability(p_b_given_a)?;

    Ok(p_a * p_b_given_a)
}

/// `P(A ∩ B) = P(A) P(B)` for independent events
pub fn independent_intersection(p_a: f64, p_b: f64) -> Result<f64> {
    check::probability(p_a)?;
    check::probability(p_b)?;

    Ok(p_a * p_b)
}

/// `P(A ∪ B) = P(A) + P(B) - P(A ∩ B)`
pub fn union(p_a: f64, p_b: f64, p_intersection: f64) -> Result<f64> {
    check::probability(p_a)?;
    check::probability(p_b)?;
    check::probability(p_intersection)?;

    Ok(p_a + p_b - p_intersection)
}

/// `P(A Δ B)`, the probability of exactly one of `A` and `B`
pub fn exclusive_union(p_a: f64, p_b: f64, p_intersection: f64) -> Result<f64> {
    check::probability(p_a)?;
    check::probability(p_b)?;
    check::probability(p_intersection)?;

    Ok(p_a + p_b - 2. * p_intersection)
}

/// Whether `P(A ∩ B) = P(A) P(B)`, within [`INDEPENDENCE_TOLERANCE`]
pub fn are_independent_from_intersection(p_a: f64, p_b: f64, p_intersection: f64) -> Result<bool> {
    check::probability(p_a)?;
    check::probability(p_b)?;
    check::probability(p_intersection)?;

    Ok((p_intersection - p_a * p_b).abs() <= INDEPENDENCE_TOLERANCE)
}

/// Whether `1 - P(A ∪ B) = (1 - P(A)) (1 - P(B))`, within [`INDEPENDENCE_TOLERANCE`]
///
/// Less reliable than [`are_independent_from_intersection`], the union accumulates more rounding
/// error.
pub fn are_independent_from_union(p_a: f64, p_b: f64, p_union: f64) -> Result<bool> {
    check::probability(p_a)?;
    check::probability(p_b)?;
    check::probability(p_union)?;

    Ok(((1. - p_union) - (1. - p_a) * (1. - p_b)).abs() <= INDEPENDENCE_TOLERANCE)
}

/// `P(A | B) = P(A ∩ B) / P(B)`
pub fn conditional(p_intersection: f64, p_b: f64) -> Result<f64> {
    check::probability(p_intersection)?;
    check::probability(p_b)?;
    check::non_zero(p_b)?;

    Ok(p_intersection / p_b)
}

/// Bayes' rule over a partition `B1, ..., Bk`
///
/// Given `P(A | Bi)` and `P(Bi)` for every `i`, returns `P(Bi | A)` for every `i`.
pub fn bayes(p_a_given_bs: &[f64], p_bs: &[f64]) -> Result<Vec<f64>> {
    check::equal_lengths(p_a_given_bs, p_bs)?;
    for &p in p_a_given_bs.iter().chain(p_bs) {
        check::probability(p)?;
    }

    let p_a: f64 = p_a_given_bs.iter().zip(p_bs).map(|(&x, &y)| x * y).sum();
    check::non_zero(p_a)?;

    let posteriors = p_a_given_bs
        .iter()
        .zip(p_bs)
        .map(|(&x, &y)| x * y / p_a)
        .collect::<Vec<_>>();
    trace!("bayes: P(A) = {}, P(Bi | A) = {:?}", p_a, posteriors);
    Ok(posteriors)
}

#[cfg(test)]
mod test {
    use approx::relative_eq;

    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn two_events() {
        let (p_a, p_b) = (0.1, 0.5);
        let p_intersection = dependent_intersection(p_a, 0.5).unwrap();

        assert_eq!(p_intersection, 0.05);
        assert_eq!(independent_intersection(p_a, p_b), Ok(0.05));
        assert!(relative_eq!(
            union(p_a, p_b, p_intersection).unwrap(),
            0.55,
            max_relative = 1e-12
        ));
        assert!(relative_eq!(
            exclusive_union(p_a, p_b, p_intersection).unwrap(),
            0.5,
            max_relative = 1e-12
        ));
        assert_eq!(
            are_independent_from_intersection(p_a, p_b, p_intersection),
            Ok(true)
        );
        assert_eq!(are_independent_from_union(p_a, p_b, 0.55), Ok(true));
        assert_eq!(are_independent_from_intersection(p_a, p_b, 0.1), Ok(false));
    }

    #[test]
    fn conditional_probability() {
        assert!(relative_eq!(
            conditional(0.05, 0.1).unwrap(),
            0.5,
            max_relative = 1e-12
        ));
        assert_eq!(conditional(0., 0.), Err(ValidationError::Zero));
    }

    #[test]
    fn bayes_rule() {
        let posteriors = bayes(&[0.5, 0.25, 0.25], &[0.2, 0.4, 0.4]).unwrap();

        for (&actual, &expected) in posteriors.iter().zip(&[1. / 3., 1. / 3., 1. / 3.]) {
            assert!(relative_eq!(actual, expected, max_relative = 1e-12));
        }
    }

    #[test]
    fn rejects() {
        assert_eq!(
            union(0.5, 1.5, 0.),
            Err(ValidationError::ProbabilityOutOfRange(1.5))
        );
        assert_eq!(
            bayes(&[0.5, 0.5], &[1.]),
            Err(ValidationError::UnequalLengths { left: 2, right: 1 })
        );
        assert_eq!(bayes(&[0., 0.], &[0.5, 0.5]), Err(ValidationError::Zero));
    }
}
