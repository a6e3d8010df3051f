use std::time::Duration;

use tracing::{debug, instrument};

use crate::{SystemTimeSource, TermCount, TimeSource, approximate_pi, measure, whole_seconds};

/// Input parameters for [`run()`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[allow(
    clippy::exhaustive_structs,
    reason = "the term count is the only recognized option"
)]
pub struct RunInput {
    /// How many terms of the BBP series to sum.
    pub term_count: TermCount,
}

/// The result of a completed run: the approximation of π and how long the summation took.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct RunOutcome {
    /// The sum of the requested number of BBP series terms.
    pub approximation: f64,

    /// Wall-clock time spent summing the terms. Formatting and printing are not included.
    pub elapsed: Duration,
}

impl RunOutcome {
    /// The elapsed time, rounded to the nearest whole second.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        whole_seconds(self.elapsed)
    }

    /// Renders the two lines that report the outcome: the approximation, then the elapsed
    /// whole seconds.
    ///
    /// The approximation uses the shortest representation that parses back to the same
    /// `f64` and always includes a fractional part.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{:?}\n{}", self.approximation, self.elapsed_seconds())
    }
}

/// Sums the configured number of BBP series terms, timing only the summation.
pub fn run(input: &RunInput) -> RunOutcome {
    run_with_time_source(input, &mut SystemTimeSource::new())
}

/// Implementation of [`run()`] that takes its timestamps from the given time source.
#[instrument(level = "debug", skip(time_source), fields(term_count = %input.term_count))]
pub fn run_with_time_source(input: &RunInput, time_source: &mut impl TimeSource) -> RunOutcome {
    debug!("summing BBP series terms");

    let measured = measure(time_source, || approximate_pi(input.term_count.get()));

    debug!(
        approximation = measured.value,
        elapsed = ?measured.elapsed,
        "summation completed"
    );

    RunOutcome {
        approximation: measured.value,
        elapsed: measured.elapsed,
    }
}
