//! Univariate descriptive statistics

mod percentiles;
mod sample;

pub use self::percentiles::Percentiles;
pub use self::sample::Sample;
