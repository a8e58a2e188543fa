use std::cmp::Ordering;
use std::{mem, ops};

use itertools::Itertools;

use crate::check;
use crate::error::Result;
use crate::float::Float;
use crate::univariate::Percentiles;

/// A collection of data points drawn from a population
///
/// Invariants:
///
/// - The sample contains at least 1 data point
#[repr(transparent)]
pub struct Sample<A>([A]);

impl<A> Sample<A>
where
    A: Float,
{
    /// Creates a new sample from an existing slice
    ///
    /// Fails if `slice` is empty
    #[allow(clippy::new_ret_no_self)]
    pub fn new(slice: &[A]) -> Result<&Sample<A>> {
        check::min_len(slice, 1)?;

        Ok(unsafe { mem::transmute(slice) })
    }

    /// Returns the biggest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn max(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&head) => elems.fold(head, |a, &b| a.max(b)),
            // NB `unreachable!` because `Sample` is guaranteed to have at least one data point
            None => unreachable!(),
        }
    }

    /// Returns the arithmetic average of the sample
    ///
    /// - Time: `O(length)`
    pub fn mean(&self) -> A {
        let n = self.len();

        self.sum() / A::cast(n)
    }

    /// Returns the middle value of the sorted sample, or the average of the two middle values
    /// when the sample has an even length
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn median(&self) -> A {
        self.percentiles().median()
    }

    /// Returns the smallest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn min(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&elem) => elems.fold(elem, |a, &b| a.min(b)),
            // NB `unreachable!` because `Sample` is guaranteed to have at least one data point
            None => unreachable!(),
        }
    }

    /// Returns the most frequent value of the sample
    ///
    /// When several values are equally frequent, the smallest of them is returned.
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn mode(&self) -> A {
        let sorted = self.sorted();

        sorted
            .iter()
            .cloned()
            .dedup_with_count()
            .fold((0, sorted[0]), |best, (count, x)| {
                if count > best.0 {
                    (count, x)
                } else {
                    best
                }
            })
            .1
    }

    /// Returns a "view" into the percentiles of the sample
    ///
    /// This "view" makes consecutive computations of percentiles much faster (`O(1)`)
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn percentiles(&self) -> Percentiles<A> {
        Percentiles::from_sorted(self.sorted().into_boxed_slice())
    }

    /// Returns a sorted copy of the sample, leaving the sample itself untouched
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn sorted(&self) -> Vec<A> {
        // NB `NaN`s compare equal to everything, their position is unspecified
        fn cmp<T>(a: &T, b: &T) -> Ordering
        where
            T: PartialOrd,
        {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }

        let mut v = self.to_vec();
        v.sort_by(cmp);
        v
    }

    /// Returns the standard deviation of the sample
    ///
    /// The `mean` can be optionally passed along to speed up (2X) the computation
    ///
    /// Fails if the sample has less than two data points
    ///
    /// - Time: `O(length)`
    pub fn std_dev(&self, mean: Option<A>) -> Result<A> {
        Ok(self.var(mean)?.sqrt())
    }

    /// Returns the sum of all the elements of the sample
    ///
    /// - Time: `O(length)`
    pub fn sum(&self) -> A {
        use std::ops::Add;

        self.iter().cloned().fold(A::cast(0), Add::add)
    }

    /// Returns the variance of the sample, using `n - 1` as the denominator
    ///
    /// The `mean` can be optionally passed along to speed up (2X) the computation
    ///
    /// Fails if the sample has less than two data points
    ///
    /// - Time: `O(length)`
    pub fn var(&self, mean: Option<A>) -> Result<A> {
        use std::ops::Add;

        check::min_len(&self.0, 2)?;

        let mean = mean.unwrap_or_else(|| self.mean());
        let sum = self
            .iter()
            .map(|&x| (x - mean).powi(2))
            .fold(A::cast(0), Add::add);

        Ok(sum / A::cast(self.len() - 1))
    }
}

impl<A> ops::Deref for Sample<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::error::ValidationError;
            use crate::univariate::Sample;

            #[test]
            fn descriptive() {
                let data: [$ty; 5] = [2., 4., 4., 1., 3.];
                let sample = Sample::new(&data).unwrap();

                assert_eq!(sample.mean(), 2.8);
                assert_eq!(sample.median(), 3.);
                assert_eq!(sample.mode(), 4.);
                assert_eq!(sample.min(), 1.);
                assert_eq!(sample.max(), 4.);
                assert!(relative_eq!(
                    sample.std_dev(None).unwrap(),
                    1.303_840_5,
                    max_relative = 1e-6
                ));
                // the input is never reordered
                assert_eq!(&sample[..], &[2., 4., 4., 1., 3.][..]);
            }

            #[test]
            fn even_median_and_tied_mode() {
                let data: [$ty; 6] = [2., 4., 4., 1., 3., 1.];
                let sample = Sample::new(&data).unwrap();

                assert_eq!(sample.median(), 2.5);
                assert_eq!(sample.mode(), 1.);
                assert_eq!(sample.sorted(), vec![1., 1., 2., 3., 4., 4.]);
            }

            #[test]
            fn too_small() {
                let empty: [$ty; 0] = [];
                assert_eq!(
                    Sample::new(&empty).err(),
                    Some(ValidationError::NotBigEnough { len: 0, min: 1 })
                );

                let one: [$ty; 1] = [7.];
                let sample = Sample::new(&one).unwrap();
                assert_eq!(sample.mode(), 7.);
                assert_eq!(sample.median(), 7.);
                assert_eq!(
                    sample.var(None),
                    Err(ValidationError::NotBigEnough { len: 1, min: 2 })
                );
            }

            quickcheck! {
                fn mean_is_bounded(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::test::vec::<$ty>(size, start) {
                        let sample = Sample::new(&v[start..]).unwrap();
                        let mean = sample.mean();
                        let slack = 1e-3;

                        TestResult::from_bool(
                            mean >= sample.min() - slack && mean <= sample.max() + slack,
                        )
                    } else {
                        TestResult::discard()
                    }
                }

                fn median_splits_sample(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::test::vec::<$ty>(size, start) {
                        let sample = Sample::new(&v[start..]).unwrap();
                        let median = sample.median();
                        let below = sample.iter().filter(|&&x| x <= median).count();
                        let above = sample.iter().filter(|&&x| x >= median).count();

                        TestResult::from_bool(2 * below >= sample.len() && 2 * above >= sample.len())
                    } else {
                        TestResult::discard()
                    }
                }

                fn variance_is_non_negative(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::test::vec::<$ty>(size, start + 1) {
                        let sample = Sample::new(&v[start..]).unwrap();

                        TestResult::from_bool(sample.var(None).unwrap() >= 0.)
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}
