//! Executor trait and configuration.
//!
//! The [`Executor`] trait is the execution-collaborator boundary: the core
//! hands over `{program text, shot count}` and expects back an ordered list
//! of per-shot outcome bitstrings, or an error distinguishable from success.
//! The core does not prescribe the collaborator's transport — adapters live
//! in their own crates and only this request/response shape crosses the
//! boundary.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExecResult;

/// Trait for execution collaborators.
///
/// # Contract
///
/// - `execute()` is the only suspension point in the core model; callers
///   issue it without blocking and a completion task writes the shared
///   result state.
/// - On success the returned list is ordered, one bitstring per shot.
/// - Failures are values (`ExecError`), never panics.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Get the name of this executor.
    fn name(&self) -> &str;

    /// Execute a program for the given number of shots.
    async fn execute(&self, program: &str, shots: u32) -> ExecResult<Vec<String>>;
}

/// Configuration for an executor instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Name of the executor.
    pub name: String,
    /// Service endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExecutorConfig {
    /// Create a new executor configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for ExecutorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorConfig")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("extra", &self.extra)
            .finish()
    }
}
