use crate::check;
use crate::error::Result;
use crate::float::Float;

/// A "view" into the percentiles of a sample
///
/// Holds a sorted copy of the sample, so consecutive lookups are `O(1)`.
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
{
    /// Wraps an already sorted, non-empty slice
    pub(crate) fn from_sorted(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%, interpolating linearly between neighbouring ranks
    ///
    /// Assumes `p` is in the range `[0, 100]`
    fn at_unchecked(&self, p: A) -> A {
        let _100 = A::cast(100);
        debug_assert!(p >= A::cast(0) && p <= _100);
        let len = self.0.len() - 1;

        if p == _100 {
            self.0[len]
        } else {
            let rank = (p / _100) * A::cast(len);
            let integer = rank.floor();
            let fraction = rank - integer;
            let n = integer.to_usize().unwrap_or(0);
            let floor = self.0[n];

            if fraction == A::cast(0) {
                floor
            } else {
                let ceiling = self.0[n + 1];
                floor + (ceiling - floor) * fraction
            }
        }
    }

    /// Returns the percentile at `p`%
    ///
    /// Fails if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> Result<A> {
        check::percentile(p.to_f64().unwrap_or(std::f64::NAN))?;

        Ok(self.at_unchecked(p))
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let (q1, _, q3) = self.quartiles();

        q3 - q1
    }

    /// Returns the 50th percentile
    ///
    /// For an even number of data points this is the average of the two middle values.
    pub fn median(&self) -> A {
        self.at_unchecked(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at_unchecked(A::cast(25)),
            self.at_unchecked(A::cast(50)),
            self.at_unchecked(A::cast(75)),
        )
    }

    /// Returns the sorted data points
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }
}
