//! Error types for the transform crate.

use thiserror::Error;

/// Errors that can occur when applying transforms to a log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Control lift was requested without any control operand.
    #[error("Control lift requires at least one control operand")]
    EmptyControls,

    /// A region mark points beyond the end of the log.
    #[error("Mark {mark} is beyond the end of the log ({len} instructions)")]
    MarkOutOfBounds {
        /// The requested mark.
        mark: usize,
        /// Current log length.
        len: usize,
    },
}

/// Result type for transform operations.
pub type CompileResult<T> = Result<T, CompileError>;
