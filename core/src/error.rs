//! Error types for the catalog client.
//!
//! # Design
//! Every failure of the top-rated fetch lands in one `CatalogError` so callers
//! handle a single failure channel. Variants carry their cause as a `String`
//! rather than a boxed source: the error is cloned into search snapshots and
//! converted to C strings at the FFI boundary.

use thiserror::Error;

/// Errors produced while configuring, fetching or decoding the catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The HTTP round-trip itself failed (DNS, TCP, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered successfully but sent no body.
    #[error("empty response body")]
    EmptyResponse,

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body is not JSON or is not a `{ "results": [...] }` envelope.
    #[error("could not decode catalog envelope: {0}")]
    Decode(String),

    /// One record inside `results` is missing a field or has the wrong type.
    #[error("malformed movie record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand for results whose error is [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
