//! Element type of a `Sample`

use cast::From;
use num_traits::float;

/// Floating point number that element counts (`usize`) and constants (`f32`) cast into
pub trait Float: float::Float + From<usize, Output = Self> + From<f32, Output = Self> {}

impl Float for f32 {}
impl Float for f64 {}
