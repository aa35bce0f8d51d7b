//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use inspirex::quote::{
    Acquirer, Acquisition, FallbackCatalog, HttpQuoteSource, QuoteSource, RetryPolicy,
};
use inspirex::ui::mvi::Reducer;
use inspirex::ui::quote::{QuoteReducer, QuoteState};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Retry budget of the real widget with a delay short enough for tests.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 2,
        delay: Duration::from_millis(10),
    }
}

/// Acquirer hitting `url` with the given per-attempt timeout.
pub fn http_acquirer(url: &str, timeout: Duration) -> Acquirer<HttpQuoteSource> {
    let source = HttpQuoteSource::new(url, timeout).expect("Failed to build HTTP client");
    Acquirer::new(source, FallbackCatalog::builtin(), fast_policy())
}

/// Run one chain, folding every event into `state` the way the UI does.
pub async fn acquire_into<S: QuoteSource>(
    acquirer: &mut Acquirer<S>,
    state: &mut QuoteState,
    retry: bool,
) -> Acquisition {
    acquirer
        .run(retry, |event| {
            *state = QuoteReducer::reduce(std::mem::take(state), event.into());
        })
        .await
}

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
