//! Codec failure kinds.
//!
//! Exactly two kinds exist, and downstream recovery logic is a plain
//! branch on them: format errors are expected and recoverable, custom
//! errors are programming failures that must surface unchanged.

use std::error::Error;

use thiserror::Error;

/// Error produced by [`Codec::decode`] or [`Codec::encode`].
///
/// [`Codec`]: crate::codec::Codec
/// [`Codec::decode`]: crate::codec::Codec::decode
/// [`Codec::encode`]: crate::codec::Codec::encode
#[derive(Debug, Error)]
pub enum CodecError {
    /// The raw or typed value does not fit the codec's domain.
    ///
    /// Always recoverable: the typed view falls back to the domain
    /// default on read and drops the write on assignment.
    #[error("{value:?} is not a valid {expected}")]
    Format {
        /// A rendering of the offending value.
        value: String,
        /// What the codec's domain accepts.
        expected: String,
    },

    /// Any other failure, typically from a caller-supplied codec.
    ///
    /// Never swallowed and never substituted with a default.
    #[error(transparent)]
    Custom(Box<dyn Error + Send + Sync>),
}

impl CodecError {
    /// Builds a format error from the offending value and a description
    /// of the expected domain.
    pub fn format(value: impl ToString, expected: impl Into<String>) -> Self {
        CodecError::Format {
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Wraps an arbitrary error as a non-recoverable codec failure.
    pub fn custom(err: impl Error + Send + Sync + 'static) -> Self {
        CodecError::Custom(Box::new(err))
    }

    /// Returns `true` for the recoverable [`CodecError::Format`] kind.
    pub fn is_format(&self) -> bool {
        matches!(self, CodecError::Format { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = CodecError::format("maybe", "true/false");
        assert_eq!(err.to_string(), r#""maybe" is not a valid true/false"#);
        assert!(err.is_format());
    }

    #[test]
    fn test_custom_error_is_not_format() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = CodecError::custom(io);
        assert!(!err.is_format());
        assert_eq!(err.to_string(), "boom");
    }
}
