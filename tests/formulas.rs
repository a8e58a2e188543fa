use approx::relative_eq;
use num_bigint::BigUint;
use quickcheck::{quickcheck, TestResult};

use statlib::combinatorics::{combinations, factorial, permutations};
use statlib::distributions::{binomial, geometric, hypergeometric, negative_binomial, poisson};
use statlib::univariate::Sample;
use statlib::{bivariate, check, report, ValidationError};

#[test]
fn poker_hands() {
    assert_eq!(combinations(52, 5), Ok(BigUint::from(2_598_960u32)));
    assert_eq!(permutations(52, 5), Ok(BigUint::from(311_875_200u32)));
}

#[test]
fn factorials_past_u64() {
    assert_eq!(factorial(20), Ok(BigUint::from(2_432_902_008_176_640_000u64)));
    assert_eq!(
        factorial(30).unwrap().to_string(),
        "265252859812191058636308480000000"
    );
}

#[test]
fn first_failed_check_is_reported() {
    // negative trials is checked before the probability
    assert_eq!(
        binomial::exactly(-1, 0, 2.),
        Err(ValidationError::NegativeTrials(-1))
    );
    assert_eq!(
        binomial::exactly(3, 1, 2.),
        Err(ValidationError::ProbabilityOutOfRange(2.))
    );
    assert_eq!(
        combinations(3, 5),
        Err(ValidationError::TooManyItems { n: 3, r: 5 })
    );
    assert_eq!(geometric::exactly(0, 0.5), Err(ValidationError::ZeroTrials));
    assert_eq!(
        poisson::exactly(-0.5, 1),
        Err(ValidationError::NegativeOccurrenceRate(-0.5))
    );
}

#[test]
fn degenerate_probabilities() {
    assert_eq!(binomial::exactly(5, 5, 1.), Ok(1.));
    assert_eq!(binomial::exactly(5, 0, 0.), Ok(1.));
    assert_eq!(geometric::exactly(1, 1.), Ok(1.));
    assert_eq!(poisson::exactly(0., 0), Ok(1.));
}

#[test]
fn hypergeometric_against_combinations() {
    // 2 aces in a 5 card hand
    let expected = 6. * 17_296. / 2_598_960.;

    assert!(relative_eq!(
        hypergeometric::exactly(52, 5, 4, 2).unwrap(),
        expected,
        max_relative = 1e-12
    ));
}

#[test]
fn bivariate_marginals() {
    let table = [
        [1. / 9., 2. / 9., 1. / 9.],
        [2. / 9., 2. / 9., 0.],
        [1. / 9., 0., 0.],
    ];

    assert!(relative_eq!(
        bivariate::joint_distribution(&table, 2, 2).unwrap(),
        1.,
        max_relative = 1e-12
    ));
    assert_eq!(
        bivariate::joint_probability(&table, 3, 0),
        Err(ValidationError::IndexOutOfRange {
            name: "y1",
            index: 3,
            last: 2
        })
    );
}

#[test]
fn describe_report() {
    let table = report::describe_table(&[2., 4., 4., 1., 3.]).unwrap();
    let text = table.to_string();

    assert!(text.contains("mean"));
    assert!(text.contains("2.8"));
    assert_eq!(
        report::describe_table(&[]),
        Err(ValidationError::NotBigEnough { len: 0, min: 1 })
    );
}

#[test]
fn json_report() {
    let table = report::binomial_table(2, 0.5).unwrap();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["rows"].as_array().map(Vec::len), Some(3));
}

quickcheck! {
    fn checks_are_idempotent(n: i64, r: i64) -> bool {
        check::subset_size(n, r) == check::subset_size(n, r)
            && check::non_negative_items(n) == check::non_negative_items(n)
    }

    fn combinations_are_symmetric(n: u8, r: u8) -> TestResult {
        let (n, r) = (i64::from(n % 60), i64::from(r % 60));
        if r > n {
            return TestResult::discard();
        }

        TestResult::from_bool(combinations(n, r) == combinations(n, n - r))
    }

    fn negative_binomial_totals_at_most_one(r: u8, p: u8) -> TestResult {
        let r = i64::from(r % 5) + 1;
        let p = f64::from(p) / 255.;
        if p == 0. {
            return TestResult::discard();
        }

        let total = negative_binomial::at_most(r + 40, r, p).unwrap();
        TestResult::from_bool(total <= 1. + 1e-9)
    }

    fn sample_bounds(data: Vec<f64>) -> TestResult {
        if data.is_empty() || data.iter().any(|x| !x.is_finite() || x.abs() > 1e100) {
            return TestResult::discard();
        }

        let sample = Sample::new(&data).unwrap();
        let (min, max) = (sample.min(), sample.max());
        let median = sample.median();

        TestResult::from_bool(min <= median && median <= max)
    }
}
