//! Error types for the finger-spelling system.
//!
//! All fallible operations in this workspace return [`CoreResult`], with
//! [`CoreError`] as the shared error type across crates.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

/// Main error type for finger-spelling operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// A hand arrived with the wrong number of landmarks.
    #[error("Invalid landmark count: expected {expected}, got {actual}")]
    InvalidLandmarkCount {
        /// Number of landmarks a complete hand carries.
        expected: usize,
        /// Number of landmarks actually received.
        actual: usize,
    },

    /// A landmark coordinate was NaN or infinite.
    #[error("Non-finite coordinate {axis}: {value}")]
    NonFiniteCoordinate {
        /// Axis name (`x`, `y`, or `z`).
        axis: char,
        /// The offending value.
        value: f32,
    },

    /// A character has no static letter pose.
    #[error("Unknown letter: '{symbol}'")]
    UnknownLetter {
        /// The character that could not be mapped.
        symbol: char,
    },

    /// A passphrase failed to parse.
    #[error("Invalid passphrase: {reason}")]
    InvalidPassphrase {
        /// Why the passphrase was rejected.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// Validation error.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl CoreError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid-passphrase error.
    #[must_use]
    pub fn invalid_passphrase(reason: impl Into<String>) -> Self {
        Self::InvalidPassphrase {
            reason: reason.into(),
        }
    }

    /// Check if the error is recoverable.
    ///
    /// Data-quality errors clear up on the next frame; the rest indicate a
    /// caller bug or bad configuration.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidLandmarkCount { .. } | Self::NonFiniteCoordinate { .. }
        )
    }
}
