use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quote::{RetryPolicy, DEFAULT_ENDPOINT};
use crate::share::DEFAULT_INTENT_URL;

/// Root configuration container.
///
/// Every section and key is optional; defaults match the built-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub retry: RetryConfig,
    pub share: ShareConfig,
}

/// Remote quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL answering GET with `{ "content": ..., "author": ... }`.
    pub url: String,
    /// Per-attempt timeout in milliseconds (default: 7000).
    pub timeout_ms: u64,
}

/// Retry behavior for one acquisition chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt (default: 2).
    pub max_retries: u32,
    /// Fixed pause between attempts in milliseconds (default: 800).
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Composer URL; the quote is appended as the `text` query parameter.
    pub intent_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 7000,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            delay_ms: policy.delay.as_millis() as u64,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_url: DEFAULT_INTENT_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}
