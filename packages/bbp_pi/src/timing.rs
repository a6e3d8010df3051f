use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// A source of monotonic timestamps used to measure how long a computation takes.
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource: Debug + Send {
    /// Captures the current timestamp.
    fn now(&mut self) -> Instant;
}

/// Captures timestamps from the operating system's monotonic clock via [`Instant::now()`].
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct SystemTimeSource;

impl SystemTimeSource {
    /// Creates a new time source backed by the operating system's monotonic clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

/// The value produced by a measured operation, together with how long the operation took.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Measured<R> {
    /// The value returned by the measured operation.
    pub value: R,

    /// The time between the timestamps taken right before and right after the operation.
    pub elapsed: Duration,
}

/// Executes `f`, capturing a timestamp immediately before and immediately after it.
///
/// Only `f` itself is inside the measured window. If the time source reports the second
/// timestamp as earlier than the first, the elapsed time is zero.
///
/// # Example
///
/// ```
/// use bbp_pi::{SystemTimeSource, approximate_pi, measure};
///
/// let measured = measure(&mut SystemTimeSource::new(), || approximate_pi(1_000));
///
/// println!("{} after {:?}", measured.value, measured.elapsed);
/// ```
pub fn measure<R>(time_source: &mut impl TimeSource, f: impl FnOnce() -> R) -> Measured<R> {
    let started = time_source.now();
    let value = f();
    let finished = time_source.now();

    Measured {
        value,
        elapsed: finished.saturating_duration_since(started),
    }
}

/// Rounds a duration to the nearest whole number of seconds.
///
/// A duration exactly halfway between two whole seconds rounds to the even one, so 0.5 seconds
/// becomes 0 and 1.5 seconds becomes 2.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// assert_eq!(bbp_pi::whole_seconds(Duration::from_millis(1_499)), 1);
/// assert_eq!(bbp_pi::whole_seconds(Duration::from_millis(1_500)), 2);
/// assert_eq!(bbp_pi::whole_seconds(Duration::from_millis(2_500)), 2);
/// ```
#[must_use]
pub fn whole_seconds(duration: Duration) -> u64 {
    const HALF_SECOND_NANOS: u32 = 500_000_000;

    let seconds = duration.as_secs();

    let round_up = match duration.subsec_nanos().cmp(&HALF_SECOND_NANOS) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => seconds & 1 == 1,
    };

    if round_up {
        seconds.saturating_add(1)
    } else {
        seconds
    }
}
