//! Model conversion error type.

use thiserror::Error;

/// Failure raised when a JSON value's runtime shape does not match the shape
/// a conversion required.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonModelError {
    #[error("JSON is not an object")]
    NotAnObject,
    #[error("invalid element")]
    InvalidElement,
    #[error("invalid format")]
    InvalidFormat,
    #[error("[{key}]: {source}")]
    InvalidValueFor {
        key: String,
        #[source]
        source: Box<JsonModelError>,
    },
}

impl JsonModelError {
    /// Wraps the error with the object key it occurred under.
    pub fn for_key(self, key: &str) -> Self {
        JsonModelError::InvalidValueFor {
            key: key.to_owned(),
            source: Box::new(self),
        }
    }
}
