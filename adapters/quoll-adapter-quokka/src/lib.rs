//! Quokka cloud simulator adapter.
//!
//! Implements the `quoll-hal` [`Executor`](quoll_hal::Executor) boundary on
//! top of the Quokka REST API: the rendered program text and shot count go
//! out as `POST /qsim/qasm`, and the per-shot classical register readout
//! comes back as the ordered outcome list.
//!
//! # Example
//!
//! ```ignore
//! use quoll_adapter_quokka::QuokkaExecutor;
//! use quoll_hal::Executor;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = QuokkaExecutor::new()?;
//! let shots = executor
//!     .execute("OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[1];\ncreg c[1];\nh q[0];\nmeasure q[0] -> c[0];", 100)
//!     .await?;
//! println!("{} shots returned", shots.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod executor;

pub use api::{BASE_URL, QasmRequest, QasmResponse, QasmResult, QuokkaClient};
pub use error::{QuokkaError, QuokkaResult};
pub use executor::QuokkaExecutor;
