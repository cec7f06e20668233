//! Fatal startup errors.

use thiserror::Error;

/// Errors that abort server startup.
///
/// There is no recoverable error path: route handlers are infallible and
/// any failure here terminates the process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener address (e.g. port already in use).
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The serve loop failed after startup.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
