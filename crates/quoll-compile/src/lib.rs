//! Structural transforms over Quoll circuit logs.
//!
//! Transforms operate on a contiguous region of a [`CircuitLog`] — typically
//! everything appended since a [`CircuitLog::mark`] — and splice their
//! output back at the region's starting position:
//!
//! - [`Inverse`] replaces a region with its temporal and algebraic inverse.
//! - [`ControlLift`] replaces each instruction with its singly-controlled
//!   equivalent, native or decomposed.
//!
//! Neither transform aborts on an instruction it cannot handle: the position
//! becomes an inline sentinel annotation and the rest of the region still
//! transforms, so the output is always inspectable.
//!
//! # Example
//!
//! ```rust
//! use quoll_compile::{Inverse, rewrite_from};
//! use quoll_ir::{CircuitLog, QubitId};
//!
//! let mut log = CircuitLog::new();
//! log.header().unwrap().qreg(1).unwrap();
//!
//! let mark = log.mark();
//! log.h(QubitId(0)).unwrap().s(QubitId(0)).unwrap();
//! rewrite_from(&mut log, mark, &Inverse).unwrap();
//!
//! // s; h inverted to sdg; h in reverse order.
//! assert_eq!(log.instructions()[2].name(), "sdg");
//! assert_eq!(log.instructions()[3].name(), "h");
//! ```

pub mod control;
pub mod error;
pub mod inverse;
pub mod transform;

pub use control::ControlLift;
pub use error::{CompileError, CompileResult};
pub use inverse::Inverse;
pub use transform::{RegionTransform, rewrite_from};
