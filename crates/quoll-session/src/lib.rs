//! Quoll Session
//!
//! Ties the stack together behind one explicit circuit-state handle: build
//! the instruction log, apply structural transforms to marked regions,
//! render the program text, hand it to the execution collaborator, and poll
//! the one-shot readiness edge for the aggregated results.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quoll_adapter_quokka::QuokkaExecutor;
//! use quoll_hal::ResultFormat;
//! use quoll_ir::{ClbitId, QubitId};
//! use quoll_session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let executor = Arc::new(QuokkaExecutor::new()?);
//!     let mut session = Session::new(executor);
//!
//!     session
//!         .circuit_mut()
//!         .header()?
//!         .qreg(1)?
//!         .creg(1)?
//!         .h(QubitId(0))?
//!         .measure(QubitId(0), ClbitId(0))?;
//!
//!     let handle = session.run(100);
//!     handle.await?;
//!
//!     if session.poll_ready() {
//!         println!("{}", session.results(ResultFormat::Summary));
//!     }
//!     Ok(())
//! }
//! ```

pub mod session;

pub use quoll_hal::ResultFormat;
pub use session::{DEFAULT_SHOTS, Session};
