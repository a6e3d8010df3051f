use std::fmt::{self, Display};
use std::num::NonZero;
use std::str::FromStr;

use new_zealand::nz;

use crate::{Error, Result};

/// The number of BBP series terms to sum, guaranteed to be at least one.
///
/// This is the only configurable aspect of a π approximation. The default is
/// [`TermCount::DEFAULT`].
///
/// # Example
///
/// ```
/// use bbp_pi::TermCount;
///
/// let term_count: TermCount = "250".parse().unwrap();
/// assert_eq!(term_count.get(), 250);
///
/// assert!("0".parse::<TermCount>().is_err());
/// assert!("-1".parse::<TermCount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermCount(NonZero<u32>);

impl TermCount {
    /// The term count used when none is specified.
    pub const DEFAULT: Self = Self(nz!(100_000));

    /// Creates a term count, returning `None` if `value` is zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZero::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the number of terms as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TermCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZero<u32>> for TermCount {
    fn from(value: NonZero<u32>) -> Self {
        Self(value)
    }
}

impl From<TermCount> for u32 {
    fn from(value: TermCount) -> Self {
        value.get()
    }
}

impl Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(invalid(s, "the value is empty"));
        }

        // `u32::from_str` tolerates a leading '+', which is not a plain positive integer.
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(s, "only the digits 0-9 are allowed"));
        }

        // Only overflow remains possible once the input is known to be all digits.
        let value = s.parse::<u32>().map_err(|e| invalid(s, &e.to_string()))?;

        Self::new(value).ok_or_else(|| invalid(s, "at least one term is required"))
    }
}

fn invalid(value: &str, problem: &str) -> Error {
    Error::InvalidTermCount {
        value: value.to_string(),
        problem: problem.to_string(),
    }
}
