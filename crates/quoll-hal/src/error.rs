//! Error types for the execution boundary.

use thiserror::Error;

/// Errors reported across the execution-collaborator boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// The execution service reported an error.
    #[error("Execution service error ({code}): {message}")]
    Api {
        /// Service-specific error code.
        code: i64,
        /// Human-readable message.
        message: String,
    },

    /// The request never reached the service, or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a payload the adapter could not interpret.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for execution operations.
pub type ExecResult<T> = Result<T, ExecError>;
