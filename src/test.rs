use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `size` points drawn uniformly from `[-100, 100)`
///
/// `None` when skipping the first `skip` points would leave nothing.
pub fn vec<T>(size: usize, skip: usize) -> Option<Vec<T>>
where
    T: SampleUniform + From<i8> + PartialOrd + Copy,
{
    if size <= skip {
        return None;
    }

    let mut rng = StdRng::from_entropy();
    let (low, high) = (T::from(-100), T::from(100));

    Some((0..size).map(|_| rng.gen_range(low..high)).collect())
}
