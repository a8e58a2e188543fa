//! Discrete bivariate distributions given as a joint probability table
//!
//! `table[y1][y2]` holds `P(Y1 = y1, Y2 = y2)`. Tables are validated on every call.

use crate::check;
use crate::error::Result;

/// `p(y1, y2) = P(Y1 = y1, Y2 = y2)`
pub fn joint_probability<R>(table: &[R], y1: i64, y2: i64) -> Result<f64>
where
    R: AsRef<[f64]>,
{
    check::joint_table(table)?;
    check::table_indices(table, y1, y2)?;

    Ok(table[y1 as usize].as_ref()[y2 as usize])
}

/// `F(y1, y2) = P(Y1 <= y1, Y2 <= y2)`
pub fn joint_distribution<R>(table: &[R], y1: i64, y2: i64) -> Result<f64>
where
    R: AsRef<[f64]>,
{
    check::joint_table(table)?;
    check::table_indices(table, y1, y2)?;

    let probability: f64 = table[..=y1 as usize]
        .iter()
        .flat_map(|row| row.as_ref()[..=y2 as usize].iter())
        .sum();
    trace!("F({}, {}) = {}", y1, y2, probability);
    Ok(probability)
}

#[cfg(test)]
mod test {
    use approx::relative_eq;

    use super::*;
    use crate::error::ValidationError;

    fn ninths() -> Vec<Vec<f64>> {
        vec![
            vec![1. / 9., 2. / 9., 1. / 9.],
            vec![2. / 9., 2. / 9., 0.],
            vec![1. / 9., 0., 0.],
        ]
    }

    #[test]
    fn probability() {
        let table = ninths();

        assert_eq!(joint_probability(&table, 0, 1), Ok(2. / 9.));
        assert_eq!(joint_probability(&table, 2, 2), Ok(0.));
    }

    #[test]
    fn distribution() {
        let table = ninths();

        assert_eq!(joint_distribution(&table, 0, 0), Ok(1. / 9.));
        assert!(relative_eq!(
            joint_distribution(&table, 1, 1).unwrap(),
            7. / 9.,
            max_relative = 1e-12
        ));
        assert!(relative_eq!(
            joint_distribution(&table, 2, 2).unwrap(),
            1.,
            max_relative = 1e-12
        ));
    }

    #[test]
    fn rejects() {
        let table = ninths();
        assert_eq!(
            joint_probability(&table, 3, 0),
            Err(ValidationError::IndexOutOfRange {
                name: "y1",
                index: 3,
                last: 2
            })
        );

        let halves = [[0.5, 0.6]];
        assert!(matches!(
            joint_distribution(&halves, 0, 0),
            Err(ValidationError::TotalProbability(_))
        ));
    }
}
