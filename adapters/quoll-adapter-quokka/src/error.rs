//! Error types for the Quokka adapter.

use thiserror::Error;

use quoll_hal::ExecError;

/// Errors from the Quokka REST API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuokkaError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The simulator reported a non-zero error code.
    #[error("Simulator error ({code}): {message}")]
    Service {
        /// Simulator error code.
        code: i64,
        /// Simulator error message.
        message: String,
    },

    /// A success response without a result payload.
    #[error("Response missing result payload")]
    MissingResult,
}

impl From<QuokkaError> for ExecError {
    fn from(err: QuokkaError) -> Self {
        match err {
            QuokkaError::Http(e) => ExecError::Transport(e.to_string()),
            QuokkaError::Api { status, message } => ExecError::Api {
                code: i64::from(status),
                message,
            },
            QuokkaError::Service { code, message } => ExecError::Api { code, message },
            QuokkaError::MissingResult => {
                ExecError::MalformedResponse("missing result payload".into())
            }
        }
    }
}

/// Result type for Quokka API operations.
pub type QuokkaResult<T> = Result<T, QuokkaError>;
