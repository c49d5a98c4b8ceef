//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when building a circuit log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires a different number of qubits.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate: &'static str,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in '{gate}'")]
    DuplicateQubit {
        /// Name of the gate.
        gate: &'static str,
        /// The duplicate qubit.
        qubit: QubitId,
    },

    /// Measurement with the wrong operand shape.
    #[error("Measure takes one qubit and one classical bit, got {qubits} and {clbits}")]
    MeasureShape {
        /// Number of qubit operands provided.
        qubits: usize,
        /// Number of classical bit operands provided.
        clbits: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
