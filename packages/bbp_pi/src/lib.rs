#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Approximates π by summing a fixed number of terms of the Bailey–Borwein–Plouffe (BBP) series:
//!
//! ```text
//! π = Σ (1/16ⁿ) · (4/(8n+1) − 2/(8n+4) − 1/(8n+5) − 1/(8n+6))
//! ```
//!
//! The series converges geometrically with a ratio of 1/16 per term, so a double-precision
//! accumulator reaches the closest representable value to π after only a handful of terms. Any
//! further terms are still added but no longer change the result.
//!
//! Terms are always summed in ascending index order. Floating-point addition is not
//! associative, so this order is part of the contract: the same term count always produces a
//! bit-identical result.
//!
//! # Example
//!
//! ```
//! let pi = bbp_pi::approximate_pi(100_000);
//!
//! assert!((pi - std::f64::consts::PI).abs() <= f64::EPSILON);
//! println!("{pi}");
//! ```
//!
//! Timing a computation the same way the `bbp_pi` binary does:
//!
//! ```
//! use bbp_pi::{RunInput, TermCount, run};
//!
//! let outcome = run(&RunInput {
//!     term_count: TermCount::new(1_000).unwrap(),
//! });
//!
//! println!("{}", outcome.render());
//! ```

mod error;
mod run;
mod series;
mod term_count;
mod timing;

pub use error::*;
pub use run::*;
pub use series::*;
pub use term_count::*;
pub use timing::*;
