//! Prints tables of formula results for hand-picked parameters.
//!
//! Every subcommand defaults to a textbook example, override any parameter on the command line:
//!
//! ```text
//! statlib binomial --n 10 --p 0.25
//! statlib --format json poisson --lambda 3.5 --max-y 12
//! ```

use std::io::{self, Write};
use std::process;
use std::str::FromStr;

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{debug, error};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use statlib::report::{self, Table};
use statlib::ValidationError;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error("Failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write table: {0}")]
    Io(#[from] io::Error),
    #[cfg(feature = "csv_output")]
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = ::std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    #[cfg(feature = "csv_output")]
    Csv,
}

impl OutputFormat {
    fn from_arg(value: Option<&str>) -> OutputFormat {
        match value {
            Some("json") => OutputFormat::Json,
            #[cfg(feature = "csv_output")]
            Some("csv") => OutputFormat::Csv,
            // `possible_values` rejects anything else
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(feature = "csv_output")]
const FORMATS: &[&str] = &["text", "json", "csv"];
#[cfg(not(feature = "csv_output"))]
const FORMATS: &[&str] = &["text", "json"];

fn option<'a, 'b>(name: &'a str, default: &'a str, help: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .long(name)
        .takes_value(true)
        .default_value(default)
        .help(help)
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("statlib")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tabulates probability, combinatorics and descriptive statistics formulas")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .global_setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .possible_values(FORMATS)
                .default_value("text")
                .global(true)
                .help("Output format"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .global(true)
                .help("Log every evaluated formula to stderr"),
        )
        .subcommand(
            SubCommand::with_name("binomial")
                .about("Successes in n independent trials")
                .arg(option("n", "4", "Number of trials"))
                .arg(option("p", "1/3", "Probability of success")),
        )
        .subcommand(
            SubCommand::with_name("geometric")
                .about("Trial of the first success")
                .arg(option("p", "0.3", "Probability of success"))
                .arg(option("max-y", "10", "Last trial to tabulate")),
        )
        .subcommand(
            SubCommand::with_name("hypergeometric")
                .about("Subset items among draws without replacement")
                .arg(option("population", "10", "Number of items in the population"))
                .arg(option("draws", "5", "Number of items drawn"))
                .arg(option("subset", "3", "Number of items in the subset")),
        )
        .subcommand(
            SubCommand::with_name("negative-binomial")
                .about("Trial of the r-th success")
                .arg(option("r", "3", "Number of successes"))
                .arg(option("p", "0.1", "Probability of success"))
                .arg(option("max-y", "50", "Last trial to tabulate")),
        )
        .subcommand(
            SubCommand::with_name("poisson")
                .about("Occurrences per interval")
                .arg(option("lambda", "2", "Mean number of occurrences per interval"))
                .arg(option("max-y", "10", "Last number of occurrences to tabulate")),
        )
        .subcommand(
            SubCommand::with_name("uniform")
                .about("Continuous uniform distribution on [a, b]")
                .arg(option("a", "20", "Minimum of the distribution"))
                .arg(option("b", "25", "Maximum of the distribution"))
                .arg(option("c", "22", "Minimum of the range"))
                .arg(option("d", "24", "Maximum of the range")),
        )
        .subcommand(
            SubCommand::with_name("chebyshev")
                .about("Tchebysheff bounds on deviating from the mean")
                .arg(option("std-dev", "3", "Standard deviation"))
                .arg(option("max-dev", "6", "Deviation from the mean")),
        )
        .subcommand(
            SubCommand::with_name("combinatorics")
                .about("Exact factorial, combinations and permutations")
                .arg(option("n", "20", "Number of objects in the set"))
                .arg(option("r", "10", "Number of objects chosen")),
        )
        .subcommand(
            SubCommand::with_name("joint")
                .about("Joint probability and distribution of a bivariate table")
                .arg(option(
                    "table",
                    "1/9,2/9,1/9;2/9,2/9,0;1/9,0,0",
                    "Rows separated by ';', entries by ','",
                )),
        )
        .subcommand(
            SubCommand::with_name("axioms")
                .about("Intersections, unions, conditional probability and Bayes' rule")
                .arg(option("p-a", "0.1", "P(A)"))
                .arg(option("p-b", "0.5", "P(B)"))
                .arg(option("p-b-given-a", "0.5", "P(B|A)"))
                .arg(option("p-a-given-f", "0.5,0.25,0.25", "P(A|Fi) for each Fi"))
                .arg(option("p-f", "0.2,0.4,0.4", "P(Fi) for each Fi")),
        )
        .subcommand(
            SubCommand::with_name("sets")
                .about("Unions, intersections and complements of named sets")
                .arg(
                    Arg::with_name("set")
                        .long("set")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("A set as name=a,b,c, may be repeated"),
                ),
        )
        .subcommand(
            SubCommand::with_name("describe")
                .about("Mean, median, mode and spread of a list of numbers")
                .arg(option("values", "2,4,4,1,3", "Comma separated numbers")),
        )
}

fn main() {
    let matches = app().get_matches();
    init_logging(matches.is_present("verbose"));

    process::exit(exit_code(run(&matches)));
}

/// Logs a failure and maps it to the process exit status
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "trace" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches<'_>) -> Result<()> {
    let format = OutputFormat::from_arg(matches.value_of("format"));
    let (name, sub) = matches.subcommand();
    let sub = match sub {
        Some(sub) => sub,
        // `SubcommandRequiredElseHelp` has already printed the help
        None => return Ok(()),
    };
    debug!("running `{}` with {:?} output", name, format);

    let tables = match name {
        "binomial" => vec![report::binomial_table(
            value_t!(sub, "n", i64)?,
            number(sub, "p")?,
        )?],
        "geometric" => vec![report::geometric_table(
            number(sub, "p")?,
            value_t!(sub, "max-y", i64)?,
        )?],
        "hypergeometric" => vec![report::hypergeometric_table(
            value_t!(sub, "population", i64)?,
            value_t!(sub, "draws", i64)?,
            value_t!(sub, "subset", i64)?,
        )?],
        "negative-binomial" => vec![report::negative_binomial_table(
            value_t!(sub, "r", i64)?,
            number(sub, "p")?,
            value_t!(sub, "max-y", i64)?,
        )?],
        "poisson" => vec![report::poisson_table(
            number(sub, "lambda")?,
            value_t!(sub, "max-y", i64)?,
        )?],
        "uniform" => vec![report::uniform_table(
            number(sub, "a")?,
            number(sub, "b")?,
            number(sub, "c")?,
            number(sub, "d")?,
        )?],
        "chebyshev" => vec![report::chebyshev_table(
            number(sub, "std-dev")?,
            number(sub, "max-dev")?,
        )?],
        "combinatorics" => vec![report::combinatorics_table(
            value_t!(sub, "n", i64)?,
            value_t!(sub, "r", i64)?,
        )?],
        "joint" => {
            let rows = sub
                .value_of("table")
                .unwrap_or_default()
                .split(';')
                .map(|row| numbers("table", row))
                .collect::<Result<Vec<_>>>()?;
            report::joint_tables(&rows)?
        }
        "axioms" => vec![report::axioms_table(
            number(sub, "p-a")?,
            number(sub, "p-b")?,
            number(sub, "p-b-given-a")?,
            &numbers("p-a-given-f", sub.value_of("p-a-given-f").unwrap_or_default())?,
            &numbers("p-f", sub.value_of("p-f").unwrap_or_default())?,
        )?],
        "sets" => vec![report::sets_table(&named_sets(sub)?)],
        "describe" => vec![report::describe_table(&numbers(
            "values",
            sub.value_of("values").unwrap_or_default(),
        )?)?],
        _ => unreachable!("clap only accepts the declared subcommands"),
    };

    emit(&tables, format)
}

fn emit(tables: &[Table], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            for (i, table) in tables.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", table)?;
            }
        }
        OutputFormat::Json => {
            match tables {
                [table] => serde_json::to_writer_pretty(&mut out, table)?,
                _ => serde_json::to_writer_pretty(&mut out, tables)?,
            }
            writeln!(out)?;
        }
        #[cfg(feature = "csv_output")]
        OutputFormat::Csv => {
            for table in tables {
                table.write_csv(&mut out)?;
            }
        }
    }

    Ok(())
}

fn invalid(arg: &str, value: &str) -> Error {
    Error::Args(clap::Error::with_description(
        &format!("Invalid value for '--{}': {:?} is not a number", arg, value),
        clap::ErrorKind::InvalidValue,
    ))
}

/// A decimal number, or a fraction written as `a/b`
fn parse(arg: &str, value: &str) -> Result<f64> {
    let value = value.trim();
    let parsed = match value.find('/') {
        Some(slash) => f64::from_str(value[..slash].trim())
            .and_then(|a| f64::from_str(value[slash + 1..].trim()).map(|b| a / b)),
        None => f64::from_str(value),
    };

    parsed.map_err(|_| invalid(arg, value))
}

fn number(matches: &ArgMatches<'_>, arg: &str) -> Result<f64> {
    parse(arg, matches.value_of(arg).unwrap_or_default())
}

fn numbers(arg: &str, list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse(arg, value))
        .collect()
}

fn named_sets<'m>(matches: &'m ArgMatches<'_>) -> Result<Vec<(&'m str, Vec<String>)>> {
    let given = match matches.values_of("set") {
        Some(values) => values.collect::<Vec<_>>(),
        None => vec![
            "planets=Mercury,Venus,Earth",
            "elements=Mercury,Carbon,Tungsten",
            "cats=Carbon,Tungsten,Bootsy",
        ],
    };

    given
        .into_iter()
        .map(|set| {
            let eq = set.find('=').ok_or_else(|| {
                Error::Args(clap::Error::with_description(
                    &format!("Invalid value for '--set': {:?} is not name=a,b,c", set),
                    clap::ErrorKind::InvalidValue,
                ))
            })?;
            let members = set[eq + 1..]
                .split(',')
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .map(str::to_owned)
                .collect();
            Ok((&set[..eq], members))
        })
        .collect()
}
