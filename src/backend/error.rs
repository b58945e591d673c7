//! Submission error types

use thiserror::Error;

/// Failure modes of a single submission attempt.
///
/// All variants collapse into the same user-visible error notification; the
/// distinction only feeds log diagnostics.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transport-level failure (endpoint unreachable, connection dropped)
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// Response body was not valid JSON
    #[error("invalid response body: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SubmitError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            SubmitError::Status { code: 500 }.to_string(),
            "endpoint returned HTTP 500"
        );
        assert_eq!(
            SubmitError::Parse("EOF".to_string()).to_string(),
            "invalid response body: EOF"
        );
    }
}
