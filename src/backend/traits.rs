//! Trait abstraction for the backend client to enable mocking in tests

use super::error::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    /// Submit a form record to the endpoint.
    ///
    /// Returns the parsed JSON response body on any 2xx answer.
    async fn submit(&self, data: &FormData) -> Result<serde_json::Value, SubmitError>;

    /// The endpoint URL this client submits to
    fn endpoint(&self) -> &str;
}
