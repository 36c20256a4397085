//! Error types for colorpick.

use thiserror::Error;

/// Result type alias for colorpick operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a color operation can refuse its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was outside its documented range, or a pixel buffer could not
    /// be reduced (empty, or not a whole number of pixels).
    #[error("invalid input: {what} = {value}")]
    InvalidInput {
        /// The component or buffer property that was rejected.
        what: &'static str,
        /// The rejected value, rendered for display.
        value: String,
    },

    /// A hex string was not `#` followed by exactly six hex digits.
    #[error("invalid hex color {input:?}, expected `#rrggbb`")]
    InvalidFormat {
        /// The string that failed to parse.
        input: String,
    },
}

impl Error {
    pub(crate) fn invalid_input(what: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput {
            what,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}
