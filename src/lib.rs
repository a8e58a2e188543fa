//! Closed-form probability, combinatorics and descriptive statistics formulas.
//!
//! Every formula validates its parameters through the shared preconditions in [`check`] before
//! doing any arithmetic, and returns a [`ValidationError`] describing the first one that failed.
//! Nothing is cached and no state is shared, so every function can be called from any thread.
//!
//! Counts of arrangements ([`combinatorics`]) are exact arbitrary precision integers; all other
//! results are `f64` and carry ordinary floating point rounding error.
//!
//! ```
//! use statlib::combinatorics;
//! use statlib::distributions::binomial;
//!
//! assert_eq!(combinatorics::combinations(52, 5).unwrap(), 2_598_960u32.into());
//! assert_eq!(binomial::exactly(2, 1, 0.5), Ok(0.5));
//! assert!(binomial::exactly(2, 3, 0.5).is_err());
//! ```

#![warn(bare_trait_objects)]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::float_cmp))]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
mod test;

mod float;

pub mod axioms;
pub mod bivariate;
pub mod chebyshev;
pub mod check;
pub mod combinatorics;
pub mod distributions;
pub mod error;
pub mod format;
pub mod report;
pub mod sets;
pub mod univariate;

pub use crate::error::{Result, ValidationError};
pub use crate::float::Float;
