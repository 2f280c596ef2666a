//! Error types exposed by the catalogue layer.

use thiserror::Error;

/// Errors surfaced while configuring or calling the catalogue service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("catalogue URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response arrived.
    #[error("network error talking to the catalogue: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The service answered with a non-success status code.
    #[error("catalogue returned HTTP {status} for {endpoint}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Endpoint that was requested.
        endpoint: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("catalogue response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
