//! Error handling types
//!
//! Hard faults only. A document that fails validation is a normal
//! result value carrying diagnostics (see the `eva-validate` crate),
//! never an `Err` of this type.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the EVA domain layer
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// A normalized value could not be rebuilt from its wire form
    #[error("Normalization error: {message}")]
    Normalization {
        /// Description of the normalization failure
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Create a normalization error
    pub fn normalization<S: Into<String>>(message: S) -> Self {
        Self::Normalization {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
