use core::fmt;

/// Result alias for `sheaf`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by vectorization and clustering.
///
/// All variants are configuration errors reported before any computation
/// starts. Numeric edge cases (zero-norm vectors, non-positive IDF, empty
/// text) are defined values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input document or vector list was empty.
    EmptyInput,

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
    },

    /// Vector dimension mismatch within one run.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidClusterCount { requested } => {
                write!(f, "cannot request {requested} clusters")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
