//! Quokka REST API client.
//!
//! Implements the Quokka cloud simulator endpoint (`POST /qsim/qasm`) for
//! running OpenQASM 2.0 programs and retrieving per-shot readouts.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{QuokkaError, QuokkaResult};

/// Quokka cloud simulator base URL.
pub const BASE_URL: &str = "https://quokka2.quokkacomputing.com";

/// Quokka REST API client.
///
/// The service is unauthenticated; only the endpoint is configurable.
#[derive(Debug)]
pub struct QuokkaClient {
    /// HTTP client with timeouts configured.
    client: Client,
    /// API base URL (without trailing slash).
    base_url: String,
}

impl QuokkaClient {
    /// Create a new client using the default production endpoint.
    pub fn new() -> QuokkaResult<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client targeting a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> QuokkaResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(QuokkaError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Run a QASM program for `count` shots.
    #[instrument(skip(self, script))]
    pub async fn run_qasm(&self, script: &str, count: u32) -> QuokkaResult<QasmResponse> {
        let url = format!("{}/qsim/qasm", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&QasmRequest { script, count })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuokkaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Request body for `POST /qsim/qasm`.
#[derive(Debug, Serialize)]
pub struct QasmRequest<'a> {
    /// The OpenQASM 2.0 program text.
    pub script: &'a str,
    /// Number of shots.
    pub count: u32,
}

/// Response body of `POST /qsim/qasm`.
#[derive(Debug, Deserialize)]
pub struct QasmResponse {
    /// `0` on success.
    pub error_code: i64,
    /// Error message when `error_code != 0`.
    #[serde(default)]
    pub error: Option<String>,
    /// Measurement readout, present on success.
    #[serde(default)]
    pub result: Option<QasmResult>,
}

/// The measurement readout of a successful run.
#[derive(Debug, Deserialize)]
pub struct QasmResult {
    /// Classical register values, one row of bits per shot.
    #[serde(default)]
    pub c: Vec<Vec<u8>>,
}

impl QasmResponse {
    /// Whether the simulator reported an error.
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }

    /// Convert into the ordered per-shot bitstring list.
    pub fn into_shots(self) -> QuokkaResult<Vec<String>> {
        if self.error_code != 0 {
            return Err(QuokkaError::Service {
                code: self.error_code,
                message: self
                    .error
                    .unwrap_or_else(|| "unspecified simulator error".into()),
            });
        }

        let result = self.result.ok_or(QuokkaError::MissingResult)?;
        Ok(result
            .c
            .iter()
            .map(|bits| bits.iter().map(u8::to_string).collect::<String>())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = QasmRequest {
            script: "h q[0];",
            count: 100,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""script":"h q[0];""#));
        assert!(json.contains(r#""count":100"#));
    }

    #[test]
    fn test_success_response_into_shots() {
        let json = r#"{"error_code":0,"result":{"c":[[0,0],[0,1],[0,0]]}}"#;
        let response: QasmResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_error());

        let shots = response.into_shots().unwrap();
        assert_eq!(shots, ["00", "01", "00"]);
    }

    #[test]
    fn test_error_response_into_shots() {
        let json = r#"{"error_code":3,"error":"syntax error on line 2"}"#;
        let response: QasmResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_error());

        let err = response.into_shots().unwrap_err();
        assert!(matches!(
            err,
            QuokkaError::Service { code: 3, .. }
        ));
    }

    #[test]
    fn test_success_without_result_payload() {
        let json = r#"{"error_code":0}"#;
        let response: QasmResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_shots(),
            Err(QuokkaError::MissingResult)
        ));
    }

    #[test]
    fn test_empty_readout() {
        let json = r#"{"error_code":0,"result":{"c":[]}}"#;
        let response: QasmResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_shots().unwrap().is_empty());
    }
}
