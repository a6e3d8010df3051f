use thiserror::Error;

/// Errors that can occur when configuring a π approximation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a supposed term count but it was not a positive integer that fits
    /// the term index range.
    #[error("invalid term count: '{value}' is invalid: {problem}")]
    InvalidTermCount {
        /// The value exactly as it was provided.
        value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

/// A specialized `Result` type for `bbp_pi` operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
