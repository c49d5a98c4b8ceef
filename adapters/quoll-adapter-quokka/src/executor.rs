//! Executor implementation backed by the Quokka REST API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use quoll_hal::{ExecResult, Executor, ExecutorConfig};

use crate::api::QuokkaClient;
use crate::error::QuokkaResult;

/// Execution collaborator backed by the Quokka cloud simulator.
pub struct QuokkaExecutor {
    config: ExecutorConfig,
    client: QuokkaClient,
}

impl QuokkaExecutor {
    /// Create an executor targeting the default production endpoint.
    pub fn new() -> QuokkaResult<Self> {
        Self::from_config(ExecutorConfig::new("quokka"))
    }

    /// Create an executor from configuration; `endpoint` overrides the
    /// default base URL.
    pub fn from_config(config: ExecutorConfig) -> QuokkaResult<Self> {
        let client = match &config.endpoint {
            Some(endpoint) => QuokkaClient::with_base_url(endpoint.clone())?,
            None => QuokkaClient::new()?,
        };
        Ok(Self { config, client })
    }
}

#[async_trait]
impl Executor for QuokkaExecutor {
    fn name(&self) -> &str {
        &self.config.name
    }

    #[instrument(skip(self, program))]
    async fn execute(&self, program: &str, shots: u32) -> ExecResult<Vec<String>> {
        debug!(shots, "submitting program to quokka");

        let response = self.client.run_qasm(program, shots).await?;
        let outcomes = response.into_shots()?;

        debug!(received = outcomes.len(), "execution completed");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_name() {
        let executor = QuokkaExecutor::new().unwrap();
        assert_eq!(executor.name(), "quokka");
    }

    #[test]
    fn test_from_config_with_endpoint() {
        let config = ExecutorConfig::new("quokka-test").with_endpoint("http://localhost:8080/");
        let executor = QuokkaExecutor::from_config(config).unwrap();
        assert_eq!(executor.name(), "quokka-test");
    }
}
