//! HTTP client for the collection endpoint
//!
//! A thin reqwest wrapper: one POST per submission, JSON in, JSON out. No
//! retries and no timeout beyond what the transport imposes.

use super::error::SubmitError;
use super::traits::BackendClientTrait;
use crate::config::TuiConfig;
use crate::state::FormData;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Default collection endpoint
const DEFAULT_ENDPOINT: &str = "https://mapbackend.vercel.app/api/data";

/// Environment variable overriding the endpoint URL
const ENDPOINT_ENV: &str = "INTAKE_TUI_ENDPOINT";

/// Client for submitting records to the collection endpoint
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackendClient {
    /// Create a client, resolving the endpoint from the environment, then the
    /// user config, then the built-in default.
    pub fn new(config: &TuiConfig) -> Self {
        let endpoint = Self::resolve_endpoint(config);
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Create a client with an explicit endpoint URL
    #[allow(dead_code)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn resolve_endpoint(config: &TuiConfig) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .or_else(|| config.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

#[async_trait]
impl BackendClientTrait for HttpBackendClient {
    async fn submit(&self, data: &FormData) -> Result<serde_json::Value, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting form record");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(data)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SubmitError::Parse(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolution_order() {
        // No env var, no config entry: built-in default
        std::env::remove_var(ENDPOINT_ENV);
        let client = HttpBackendClient::new(&TuiConfig::default());
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);

        // Config entry beats the default
        let config = TuiConfig {
            endpoint_url: Some("https://example.test/collect".to_string()),
        };
        let client = HttpBackendClient::new(&config);
        assert_eq!(client.endpoint(), "https://example.test/collect");

        // Env var beats both
        std::env::set_var(ENDPOINT_ENV, "https://env.test/collect");
        let client = HttpBackendClient::new(&config);
        assert_eq!(client.endpoint(), "https://env.test/collect");
        std::env::remove_var(ENDPOINT_ENV);
    }

    #[test]
    fn test_with_endpoint() {
        let client = HttpBackendClient::with_endpoint("http://127.0.0.1:9/nowhere");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/nowhere");
    }

    #[test]
    fn test_transport_failure_maps_to_network_error() {
        // Port 9 (discard) is not listening; the send itself must fail and
        // surface as SubmitError::Network, never a panic.
        let client = HttpBackendClient::with_endpoint("http://127.0.0.1:9/nowhere");
        let data = FormData::default();
        let result = tokio_test::block_on(client.submit(&data));
        match result {
            Err(SubmitError::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
