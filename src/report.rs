//! Printable tables of formula results
//!
//! Each builder evaluates one family of formulas over a range of outcomes and collects the results
//! into a [`Table`], which renders as aligned text, JSON or (with the `csv_output` feature) CSV.

use std::fmt;

use crate::axioms;
use crate::bivariate;
use crate::chebyshev;
use crate::combinatorics;
use crate::distributions::{
    binomial, geometric, hypergeometric, negative_binomial, poisson, uniform,
};
use crate::error::Result;
use crate::format;
use crate::sets;
use crate::univariate::Sample;

/// A single table cell
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Probability(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Probability(p) => f.write_str(&format::probability(*p)),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// The output of one demonstration
///
/// Rendered as the parameter lines, the column headers and rows (if any), then the summary lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub parameters: Vec<(String, String)>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub summary: Vec<(String, String)>,
}

impl Table {
    fn new(title: &str) -> Table {
        Table {
            title: title.to_owned(),
            ..Table::default()
        }
    }

    fn parameter<V: ToString>(mut self, name: &str, value: V) -> Table {
        self.parameters.push((name.to_owned(), value.to_string()));
        self
    }

    fn columns(mut self, columns: &[&str]) -> Table {
        self.columns = columns.iter().map(|&c| c.to_owned()).collect();
        self
    }

    fn rows(mut self, rows: Vec<Vec<Cell>>) -> Table {
        self.rows = rows;
        self
    }

    fn summary<V: ToString>(mut self, name: &str, value: V) -> Table {
        self.summary.push((name.to_owned(), value.to_string()));
        self
    }

    /// Width of every column: the widest of its header and cells
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.to_string().chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }

    /// Writes the rows as CSV, one header line followed by one line per row
    #[cfg(feature = "csv_output")]
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> ::csv::Result<()> {
        let mut writer = ::csv::Writer::from_writer(writer);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.parameters {
            writeln!(f, "{} = {}", name, value)?;
        }

        if !self.columns.is_empty() {
            if !self.parameters.is_empty() {
                writeln!(f)?;
            }

            let widths = self.widths();
            let line = |f: &mut fmt::Formatter<'_>, cells: Vec<String>| -> fmt::Result {
                let padded = cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
                    .collect::<Vec<_>>();
                writeln!(f, "{}", padded.join("  ").trim_end())
            };

            line(f, self.columns.clone())?;
            for row in &self.rows {
                line(f, row.iter().map(|cell| cell.to_string()).collect())?;
            }
        }

        if !self.summary.is_empty() {
            if !self.parameters.is_empty() || !self.columns.is_empty() {
                writeln!(f)?;
            }

            for (name, value) in &self.summary {
                writeln!(f, "{} = {}", name, value)?;
            }
        }

        Ok(())
    }
}

const TAIL_COLUMNS: [&str; 4] = ["y", "P(Y=y)", "P(Y>=y)", "P(Y<=y)"];

/// One row per outcome `y`: the probability of exactly, at least and at most `y`
fn tail_rows<I, E, L, M>(ys: I, exactly: E, at_least: L, at_most: M) -> Result<Vec<Vec<Cell>>>
where
    I: IntoIterator<Item = i64>,
    E: Fn(i64) -> Result<f64>,
    L: Fn(i64) -> Result<f64>,
    M: Fn(i64) -> Result<f64>,
{
    ys.into_iter()
        .map(|y| {
            Ok(vec![
                Cell::Int(y),
                Cell::Probability(exactly(y)?),
                Cell::Probability(at_least(y)?),
                Cell::Probability(at_most(y)?),
            ])
        })
        .collect()
}

pub fn binomial_table(n: i64, p: f64) -> Result<Table> {
    let rows = tail_rows(
        0..=n,
        |y| binomial::exactly(n, y, p),
        |y| binomial::at_least(n, y, p),
        |y| binomial::at_most(n, y, p),
    )?;

    Ok(Table::new("binomial")
        .parameter("n", n)
        .parameter("p", p)
        .columns(&TAIL_COLUMNS)
        .rows(rows)
        .summary("E(Y)", binomial::expected_value(n, p)?)
        .summary("V(Y)", binomial::variance(n, p)?))
}

/// First success on trial `1..=max_y`
pub fn geometric_table(p: f64, max_y: i64) -> Result<Table> {
    let rows = tail_rows(
        1..=max_y,
        |y| geometric::exactly(y, p),
        |y| geometric::at_least(y, p),
        |y| geometric::at_most(y, p),
    )?;

    Ok(Table::new("geometric")
        .parameter("p", p)
        .columns(&TAIL_COLUMNS)
        .rows(rows)
        .summary("E(Y)", geometric::expected_value(p)?)
        .summary("V(Y)", geometric::variance(p)?))
}

/// Every possible number of subset items among `n` draws
pub fn hypergeometric_table(population: i64, n: i64, r: i64) -> Result<Table> {
    // validates the parameters before they size the loop
    let expected_value = hypergeometric::expected_value(population, n, r)?;
    let variance = hypergeometric::variance(population, n, r)?;

    let rows = tail_rows(
        0..=n.min(r),
        |y| hypergeometric::exactly(population, n, r, y),
        |y| hypergeometric::at_least(population, n, r, y),
        |y| hypergeometric::at_most(population, n, r, y),
    )?;

    Ok(Table::new("hypergeometric")
        .parameter("N", population)
        .parameter("n", n)
        .parameter("r", r)
        .columns(&TAIL_COLUMNS)
        .rows(rows)
        .summary("E(Y)", expected_value)
        .summary("V(Y)", variance))
}

/// `r`-th success on trial `r..=max_y`
pub fn negative_binomial_table(r: i64, p: f64, max_y: i64) -> Result<Table> {
    let expected_value = negative_binomial::expected_value(r, p)?;
    let variance = negative_binomial::variance(r, p)?;

    let rows = tail_rows(
        r..=max_y,
        |y| negative_binomial::exactly(y, r, p),
        |y| negative_binomial::at_least(y, r, p),
        |y| negative_binomial::at_most(y, r, p),
    )?;

    Ok(Table::new("negative binomial")
        .parameter("r", r)
        .parameter("p", p)
        .columns(&TAIL_COLUMNS)
        .rows(rows)
        .summary("E(Y)", expected_value)
        .summary("V(Y)", variance))
}

/// `0..=max_y` occurrences
pub fn poisson_table(lambda: f64, max_y: i64) -> Result<Table> {
    let rows = tail_rows(
        0..=max_y,
        |y| poisson::exactly(lambda, y),
        |y| poisson::at_least(lambda, y),
        |y| poisson::at_most(lambda, y),
    )?;

    Ok(Table::new("poisson")
        .parameter("λ", lambda)
        .columns(&TAIL_COLUMNS)
        .rows(rows)
        .summary("E(Y)", poisson::expected_value(lambda)?)
        .summary("V(Y)", poisson::variance(lambda)?))
}

/// Chebyshev bounds for a deviation of `max_dev` given a standard deviation of `std_dev`
pub fn chebyshev_table(std_dev: f64, max_dev: f64) -> Result<Table> {
    Ok(Table::new("chebyshev")
        .parameter("σ", std_dev)
        .parameter("maxDev", max_dev)
        .summary(
            "Within range  ≥",
            format::probability(chebyshev::within_range(std_dev, max_dev)?),
        )
        .summary(
            "Outside range ≤",
            format::probability(chebyshev::outside_range(std_dev, max_dev)?),
        ))
}

pub fn uniform_table(theta1: f64, theta2: f64, min: f64, max: f64) -> Result<Table> {
    Ok(Table::new("uniform")
        .parameter("a", theta1)
        .parameter("b", theta2)
        .parameter("c", min)
        .parameter("d", max)
        .summary("P(c≤y≤d)", uniform::between(theta1, theta2, min, max)?)
        .summary("P(c≤y)", uniform::at_least(theta1, theta2, min)?)
        .summary("P(y≤d)", uniform::at_most(theta1, theta2, max)?)
        .summary("E(Y)", uniform::expected_value(theta1, theta2)?)
        .summary("V(Y)", uniform::variance(theta1, theta2)?))
}

/// `n!`, `C(n, r)` and `P(n, r)`
pub fn combinatorics_table(n: i64, r: i64) -> Result<Table> {
    Ok(Table::new("combinatorics")
        .summary(&format!("{}!", n), combinatorics::factorial(n)?)
        .summary(
            &format!("C({}, {})", n, r),
            combinatorics::combinations(n, r)?,
        )
        .summary(
            &format!("P({}, {})", n, r),
            combinatorics::permutations(n, r)?,
        ))
}

/// `p(y1, y2)` and `F(y1, y2)` for every cell of a joint probability table
pub fn joint_tables<R>(table: &[R]) -> Result<Vec<Table>>
where
    R: AsRef<[f64]>,
{
    Ok(vec![
        grid("p(y1,y2)", table, |y1, y2| {
            bivariate::joint_probability(table, y1, y2)
        })?,
        grid("F(y1,y2)", table, |y1, y2| {
            bivariate::joint_distribution(table, y1, y2)
        })?,
    ])
}

fn grid<R, F>(title: &str, table: &[R], formula: F) -> Result<Table>
where
    R: AsRef<[f64]>,
    F: Fn(i64, i64) -> Result<f64>,
{
    // validates the table, the first row exists past this point
    formula(0, 0)?;

    let width = table[0].as_ref().len() as i64;
    let mut columns = vec![format!("{} =", title)];
    columns.extend((0..width).map(|y2| y2.to_string()));

    let rows = (0..table.len() as i64)
        .map(|y1| {
            let mut row = vec![Cell::Int(y1)];
            for y2 in 0..width {
                row.push(Cell::Probability(formula(y1, y2)?));
            }
            Ok(row)
        })
        .collect::<Result<_>>()?;

    Ok(Table {
        title: title.to_owned(),
        columns,
        rows,
        ..Table::default()
    })
}

/// The two-event identities followed by Bayes' rule over a partition
pub fn axioms_table(
    p_a: f64,
    p_b: f64,
    p_b_given_a: f64,
    p_a_given_fs: &[f64],
    p_fs: &[f64],
) -> Result<Table> {
    let p_intersection = axioms::dependent_intersection(p_a, p_b_given_a)?;
    let p_union = axioms::union(p_a, p_b, p_intersection)?;
    let posteriors = axioms::bayes(p_a_given_fs, p_fs)?;

    let rows = p_fs
        .iter()
        .zip(p_a_given_fs)
        .zip(&posteriors)
        .enumerate()
        .map(|(i, ((&p_f, &p_a_given_f), &posterior))| {
            vec![
                Cell::Text(format!("F{}", i + 1)),
                Cell::Probability(p_f),
                Cell::Probability(p_a_given_f),
                Cell::Probability(posterior),
            ]
        })
        .collect();

    Ok(Table::new("axioms")
        .parameter("P(A)", p_a)
        .parameter("P(B)", p_b)
        .parameter("P(B|A)", p_b_given_a)
        .columns(&["i", "P(Fi)", "P(A|Fi)", "P(Fi|A)"])
        .rows(rows)
        .summary("P(A∩B)", p_intersection)
        .summary(
            "P(A∩B) assuming independence",
            axioms::independent_intersection(p_a, p_b)?,
        )
        .summary("P(A∪B)", p_union)
        .summary(
            "P(AΔB)",
            axioms::exclusive_union(p_a, p_b, p_intersection)?,
        )
        .summary(
            "independent (intersection)",
            axioms::are_independent_from_intersection(p_a, p_b, p_intersection)?,
        )
        .summary(
            "independent (union)",
            axioms::are_independent_from_union(p_a, p_b, p_union)?,
        )
        .summary("P(A|B)", axioms::conditional(p_intersection, p_b)?))
}

/// Pairwise unions and intersections of the named sets, and the complement of the last set in
/// the first
pub fn sets_table(named: &[(&str, Vec<String>)]) -> Table {
    let mut table = Table::new("sets");
    for (name, set) in named {
        table = table.parameter(name, format::list(set));
    }

    for (i, (a_name, a)) in named.iter().enumerate() {
        for (b_name, b) in &named[i + 1..] {
            table = table.summary(
                &format!("{} ∪ {}", a_name, b_name),
                format::list(&sets::union(a, b)),
            );
        }
    }
    for (i, (a_name, a)) in named.iter().enumerate() {
        for (b_name, b) in &named[i + 1..] {
            table = table.summary(
                &format!("{} ∩ {}", a_name, b_name),
                format::list(&sets::intersection(a, b)),
            );
        }
    }
    if let (Some((a_name, a)), Some((b_name, b))) = (named.first(), named.last()) {
        if named.len() > 1 {
            table = table.summary(
                &format!("{} \\ {}", a_name, b_name),
                format::list(&sets::complement(a, b)),
            );
        }
    }

    table
}

/// Descriptive statistics of `data`
pub fn describe_table(data: &[f64]) -> Result<Table> {
    let sample = Sample::new(data)?;
    let mean = sample.mean();
    let (q1, median, q3) = sample.percentiles().quartiles();

    let mut table = Table::new("describe")
        .parameter("data", format::list(data))
        .summary("mean", format::short(mean))
        .summary("median", format::short(median))
        .summary("mode", format::short(sample.mode()))
        .summary("min", format::short(sample.min()))
        .summary("max", format::short(sample.max()))
        .summary(
            "quartiles",
            format!(
                "{}, {}, {}",
                format::short(q1),
                format::short(median),
                format::short(q3)
            ),
        );

    // a single data point has no spread
    if data.len() > 1 {
        table = table
            .summary("variance", format::short(sample.var(Some(mean))?))
            .summary("standard deviation", format::short(sample.std_dev(Some(mean))?));
    }

    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn binomial_rows() {
        let table = binomial_table(4, 1. / 3.).unwrap();

        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.columns, TAIL_COLUMNS.to_vec());
        assert_eq!(table.rows[0][0], Cell::Int(0));
        assert_eq!(table.rows[4][1].to_string(), "0.012346");
        assert_eq!(table.summary[0].0, "E(Y)");
    }

    #[test]
    fn text_layout() {
        let table = geometric_table(0.5, 2).unwrap();
        let expected = "\
p = 0.5

y  P(Y=y)    P(Y>=y)   P(Y<=y)
1  0.500000  1.000000  0.500000
2  0.250000  0.500000  0.750000

E(Y) = 2
V(Y) = 2
";

        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn hypergeometric_rows_cover_the_support() {
        let table = hypergeometric_table(10, 5, 3).unwrap();

        assert_eq!(table.rows.len(), 4);
        assert_eq!(
            hypergeometric_table(10, 11, 3),
            Err(ValidationError::TooManyItems { n: 10, r: 11 })
        );
    }

    #[test]
    fn negative_binomial_starts_at_r() {
        let table = negative_binomial_table(3, 0.1, 50).unwrap();

        assert_eq!(table.rows.len(), 48);
        assert_eq!(table.rows[0][0], Cell::Int(3));
    }

    #[test]
    fn joint_table_grids() {
        let p = vec![
            vec![1. / 9., 2. / 9., 1. / 9.],
            vec![2. / 9., 2. / 9., 0.],
            vec![1. / 9., 0., 0.],
        ];
        let tables = joint_tables(&p).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns, vec!["p(y1,y2) =", "0", "1", "2"]);
        assert_eq!(tables[1].rows[2][3].to_string(), "1.000000");

        let ragged = vec![vec![0.5], vec![0.25, 0.25]];
        assert!(joint_tables(&ragged).is_err());
    }

    #[test]
    fn set_summaries() {
        let named = vec![
            ("planets", vec!["Mercury".to_owned(), "Venus".to_owned()]),
            ("metals", vec!["Mercury".to_owned(), "Tungsten".to_owned()]),
        ];
        let table = sets_table(&named);

        assert_eq!(
            table.summary,
            vec![
                (
                    "planets ∪ metals".to_owned(),
                    "[Mercury, Venus, Tungsten]".to_owned()
                ),
                ("planets ∩ metals".to_owned(), "[Mercury]".to_owned()),
                ("planets \\ metals".to_owned(), "[Venus]".to_owned()),
            ]
        );
    }

    #[test]
    fn descriptive_summary() {
        let table = describe_table(&[2., 4., 4., 1., 3.]).unwrap();

        assert!(table
            .summary
            .contains(&("median".to_owned(), "3.0000".to_owned())));
        assert!(table
            .summary
            .contains(&("variance".to_owned(), "1.7000".to_owned())));
        assert!(table.summary.contains(&(
            "quartiles".to_owned(),
            "2.0000, 3.0000, 4.0000".to_owned()
        )));
        assert_eq!(
            describe_table(&[]),
            Err(ValidationError::NotBigEnough { len: 0, min: 1 })
        );
    }

    #[test]
    fn exact_counts() {
        let table = combinatorics_table(20, 10).unwrap();

        assert_eq!(
            table.summary,
            vec![
                ("20!".to_owned(), "2432902008176640000".to_owned()),
                ("C(20, 10)".to_owned(), "184756".to_owned()),
                ("P(20, 10)".to_owned(), "670442572800".to_owned()),
            ]
        );
    }
}
