//! Quoll Circuit Instruction Log
//!
//! This crate provides the core data structures for describing quantum
//! circuits as ordered instruction logs. It forms the foundation of the
//! Quoll stack: the log built here is rendered to program text by
//! `quoll-qasm`, rewritten by the structural transforms in `quoll-compile`,
//! and executed through the collaborator boundary in `quoll-hal`.
//!
//! # Overview
//!
//! - **Identifiers**: [`QubitId`], [`ClbitId`] for addressing the fixed
//!   `q` / `c` registers
//! - **Gates**: [`StandardGate`], the closed gate-kind sum type
//! - **Catalog**: [`catalog`] — arity, [`InverseRule`] and [`ControlRule`]
//!   as total functions over the gate set
//! - **Instructions**: [`Instruction`] combining a kind with its operands
//! - **Log**: [`CircuitLog`], the append-only ordered sequence with the
//!   fluent builder surface and the mark/splice region operations used by
//!   transforms
//!
//! # Example: Building a Bell Pair Program
//!
//! ```rust
//! use quoll_ir::{CircuitLog, ClbitId, QubitId};
//!
//! let mut log = CircuitLog::new();
//! log.header()?
//!     .qreg(2)?
//!     .creg(2)?
//!     .h(QubitId(0))?
//!     .cx(QubitId(0), QubitId(1))?
//!     .measure(QubitId(0), ClbitId(0))?
//!     .measure(QubitId(1), ClbitId(1))?;
//! # Ok::<(), quoll_ir::IrError>(())
//! ```

pub mod catalog;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use catalog::{CatalogEntry, ControlRule, InverseRule};
pub use circuit::CircuitLog;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
