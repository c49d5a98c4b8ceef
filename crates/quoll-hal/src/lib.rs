//! Quoll Execution Layer
//!
//! This crate defines the boundary between the circuit-building core and the
//! external execution collaborator, and everything needed to interpret what
//! comes back:
//!
//! - The [`Executor`] trait: hand over `{program text, shot count}`, receive
//!   an ordered list of per-shot outcome bitstrings or an [`ExecError`].
//! - [`Counts`] and [`ResultAggregator`]: the insertion-ordered histogram
//!   and its derived statistics (counts, probabilities, percentages, and the
//!   four presentation modes of [`ResultFormat`]).
//! - [`ResultNotifier`]: the one-shot readiness edge a polling caller
//!   observes exactly once per completed execution.
//!
//! # Implementing an Executor
//!
//! ```ignore
//! use quoll_hal::{ExecResult, Executor};
//! use async_trait::async_trait;
//!
//! struct MyExecutor;
//!
//! #[async_trait]
//! impl Executor for MyExecutor {
//!     fn name(&self) -> &str {
//!         "my_executor"
//!     }
//!
//!     async fn execute(&self, program: &str, shots: u32) -> ExecResult<Vec<String>> {
//!         // Hand the program text to the service, collect one bitstring
//!         // per shot.
//!         # todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod executor;
pub mod notify;
pub mod result;

pub use error::{ExecError, ExecResult};
pub use executor::{Executor, ExecutorConfig};
pub use notify::ResultNotifier;
pub use result::{Counts, ResultAggregator, ResultFormat};
