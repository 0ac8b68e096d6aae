//! Error type shared by every selection entry point.

use thiserror::Error;

/// Failures raised before a selection touches its input.
///
/// An out-of-range rank is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sequence or the rank was missing, or the rank was not an integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = Error::invalid("rank is missing");
        assert_eq!(err.to_string(), "invalid argument: rank is missing");
    }
}
