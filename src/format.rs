use std::fmt::Display;

use itertools::Itertools;

/// Fixed six decimal places, the way probabilities are tabulated
pub fn probability(p: f64) -> String {
    format!("{:.6}", p)
}

/// Four significant-ish digits for summary values
pub fn short(n: f64) -> String {
    let n_abs = n.abs();

    if n_abs < 10.0 {
        format!("{:.4}", n)
    } else if n_abs < 100.0 {
        format!("{:.3}", n)
    } else if n_abs < 1000.0 {
        format!("{:.2}", n)
    } else if n_abs < 10000.0 {
        format!("{:.1}", n)
    } else {
        format!("{:.0}", n)
    }
}

/// `[a, b, c]`
pub fn list<T>(xs: &[T]) -> String
where
    T: Display,
{
    format!("[{}]", xs.iter().join(", "))
}
