//! Command-line front-end: build a determinant from `-m`/`-n`/`-t` flags,
//! run Gaussian elimination and print the text dump.
//!
//! Exit code is -1 on missing or invalid arguments (a dimension below 1 or
//! an element count that does not match `m * n`), 0 on success.

use std::process;

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

use tabula_linalg::Determinant;

fn cli() -> Command {
    Command::new("tabula")
        .version(clap::crate_version!())
        .about("Eliminate a determinant given in column-major order")
        .arg(
            Arg::new("rows")
                .short('m')
                .value_name("ROWS")
                .help("Number of rows")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("cols")
                .short('n')
                .value_name("COLS")
                .help("Number of columns")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("values")
                .short('t')
                .value_name("VALUE")
                .help("Table entries, column-major")
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true),
        )
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("TABULA_LOG", "error"))
        .init();

    let matches = cli().get_matches();

    let (Some(&rows), Some(&cols)) = (
        matches.get_one::<i64>("rows"),
        matches.get_one::<i64>("cols"),
    ) else {
        eprintln!("Error:");
        eprintln!("\t-m\tnumber of rows");
        eprintln!("\t-n\tnumber of columns");
        eprintln!("\t-t\ttable entries, column-major");
        process::exit(-1);
    };

    if rows < 1 || cols < 1 {
        eprintln!("rows and columns must both be at least 1");
        process::exit(-1);
    }

    let values: Vec<f64> = matches
        .get_many::<f64>("values")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    #[allow(clippy::cast_sign_loss)]
    let (rows, cols) = (rows as usize, cols as usize);
    if values.len() != rows * cols {
        eprintln!(
            "expected {} elements, got {}",
            rows * cols,
            values.len()
        );
        process::exit(-1);
    }

    log::debug!("eliminating a {rows} x {cols} table");

    let Ok(mut det) = Determinant::new(rows, values) else {
        eprintln!("could not build the determinant");
        process::exit(-1);
    };
    det.eliminate();
    print!("{det}");
}
