//! Data layer error types

use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Mapping itself is infallible; these cover the I/O edges around it:
/// talking to the remote API and reading or writing the local store.
#[derive(Debug, Error)]
pub enum DataError {
    /// The HTTP request could not be sent or the response never arrived.
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// The API answered with a non-success status other than 404.
    #[error("API returned status {status}")]
    Api { status: u16 },

    /// The requested resource does not exist remotely.
    #[error("Resource not found")]
    NotFound,

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The local store failed to read or write a record.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DataError {
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
