//! Error types for stylekit operations.

use thiserror::Error;

/// Errors that can occur while building values from text or writing CSS.
#[derive(Error, Debug)]
pub enum Error {
    /// Text that does not name a member of the given value family.
    #[error("Invalid {property} value: {input:?}")]
    InvalidValue {
        property: &'static str,
        input: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(property: &'static str, input: &str) -> Self {
        Error::InvalidValue {
            property,
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
