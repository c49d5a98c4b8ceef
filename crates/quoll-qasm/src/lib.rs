//! OpenQASM 2.0 emission for Quoll circuit logs.
//!
//! Rendering happens only at this boundary: the builder and the structural
//! transforms all operate over the structured instruction log in `quoll-ir`,
//! and this crate turns the log into the newline-separated program text the
//! execution collaborator consumes.
//!
//! # Example
//!
//! ```rust
//! use quoll_ir::{CircuitLog, QubitId};
//!
//! let mut log = CircuitLog::new();
//! log.header()?.qreg(1)?.h(QubitId(0))?;
//!
//! let program = quoll_qasm::emit(&log);
//! assert!(program.ends_with("h q[0];"));
//! # Ok::<(), quoll_ir::IrError>(())
//! ```

pub mod emitter;

pub use emitter::{emit, emit_instruction};
