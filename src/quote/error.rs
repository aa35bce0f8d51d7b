use thiserror::Error;

/// Failures of a single fetch attempt.
///
/// None of these leave the acquisition procedure; they drive retry and
/// fallback instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response within the configured timeout
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Response arrived with a non-2xx status
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// Connection-level failure (DNS, refused, offline, body read)
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Body is not JSON or lacks a usable `content` field
    #[error("Invalid quote payload: {0}")]
    Parse(String),
}

impl FetchError {
    /// Short, stable name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout { .. } => "timeout",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Network { .. } => "network",
            FetchError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_and_kind() {
        let err = FetchError::Timeout { timeout_ms: 7000 };
        assert_eq!(err.to_string(), "Request timed out after 7000 ms");
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn http_status_message() {
        let err = FetchError::HttpStatus { status: 500 };
        assert_eq!(err.to_string(), "HTTP 500");
        assert_eq!(err.kind(), "http_status");
    }

    #[test]
    fn parse_kind() {
        assert_eq!(FetchError::Parse("bad".into()).kind(), "parse");
    }
}
