//! Error types for request invocation.
//!
//! The taxonomy follows who handles each failure: invalid bodies and
//! unreadable multipart files abort the invocation before (or instead of)
//! the network call and surface as error envelopes; transport failures are
//! produced by [`HttpTransport`](crate::transport::HttpTransport)
//! implementations and propagate the same way. Response-body read failures
//! are not represented here — the normalizer recovers them in place.

use thiserror::Error;

/// Failure of the underlying HTTP exchange.
///
/// Produced by transport implementations for connection, protocol, and
/// timeout failures. The tool layer never constructs one itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure of a single tool invocation, prior to response normalization.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The request `value` claims to be JSON (brace/bracket-prefixed) but
    /// does not parse. The request is never sent.
    #[error("Invalid JSON value: {message}")]
    InvalidBody { message: String },

    /// A multipart file field's path could not be read.
    #[error("Failed to read file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP capability failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl InvokeError {
    pub fn invalid_body(message: impl Into<String>) -> Self {
        InvokeError::InvalidBody {
            message: message.into(),
        }
    }

    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        InvokeError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
