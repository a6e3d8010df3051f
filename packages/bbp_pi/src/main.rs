#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the `bbp_pi` tool.
//!
//! Sums terms of the Bailey–Borwein–Plouffe series and prints two lines to standard output:
//! the resulting approximation of π, then the number of whole seconds the summation took.
//!
//! # Usage
//!
//! ```text
//! bbp_pi [--terms <N>] [--verbose]
//! ```
//!
//! Diagnostics are written to standard error, keeping standard output limited to the result.

use argh::FromArgs;
use bbp_pi::{RunInput, TermCount, run};
use tracing::level_filters::LevelFilter;

/// Approximates pi by summing terms of the Bailey-Borwein-Plouffe series and reports how long
/// the summation took.
#[derive(FromArgs)]
struct Args {
    /// number of series terms to sum (default: 100000)
    #[argh(option)]
    terms: Option<TermCount>,

    /// emit debug diagnostics to standard error
    #[argh(switch)]
    verbose: bool,
}

// Binary entry point - covered by the integration tests in `tests/`.
#[cfg_attr(test, mutants::skip)]
fn main() {
    // Invalid arguments, including an invalid term count, end the process here.
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let input = RunInput {
        term_count: args.terms.unwrap_or_default(),
    };

    let outcome = run(&input);

    println!("{}", outcome.render());
}
