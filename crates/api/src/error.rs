//! Errors raised while starting or running the HTTP server.

use thiserror::Error;

/// Errors that can stop the server.
///
/// Request handling itself is infallible; these only come from the listener.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound to the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The bound listener could not report its local address.
    #[error("Failed to read listener address: {0}")]
    LocalAddr(#[source] std::io::Error),

    /// The accept loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
