use std::time::Duration;

use tracing::{error, info, warn};

use super::catalog::FallbackCatalog;
use super::error::FetchError;
use super::model::Quote;
use super::source::QuoteSource;

/// Advisory shown alongside a catalog quote.
pub const FALLBACK_ADVISORY: &str =
    "Network issue or API blocked — showing a local quote. Try again to fetch live quotes.";

/// Bounded retry with a fixed pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay: Duration::from_millis(800),
        }
    }
}

/// How a chain ended.
#[derive(Debug)]
pub enum Acquisition {
    Remote(Quote),
    Fallback { quote: Quote, error: FetchError },
}

impl Acquisition {
    pub fn quote(&self) -> &Quote {
        match self {
            Acquisition::Remote(quote) | Acquisition::Fallback { quote, .. } => quote,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Acquisition::Fallback { .. })
    }
}

/// Transition reported while a chain runs.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquireEvent {
    Started,
    /// Attempt failed; retry number `attempt` (1-based) follows the delay.
    Retrying { attempt: u32, error: String },
    Resolved(Quote),
    FellBack { quote: Quote, advisory: String },
}

impl AcquireEvent {
    /// True for the events that end a chain.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::FellBack { .. })
    }
}

/// Runs acquisition chains against a [`QuoteSource`].
///
/// Chains on one `Acquirer` never overlap: `run` takes `&mut self`.
pub struct Acquirer<S> {
    source: S,
    catalog: FallbackCatalog,
    policy: RetryPolicy,
    retry_count: u32,
}

impl<S: QuoteSource> Acquirer<S> {
    pub fn new(source: S, catalog: FallbackCatalog, policy: RetryPolicy) -> Self {
        Self {
            source,
            catalog,
            policy,
            retry_count: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Retries used by the current or most recent chain.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Run one chain, reporting each transition to `emit`.
    ///
    /// `emit` sees `Started` first and exactly one of `Resolved`/`FellBack`
    /// last, with a `Retrying` for every retry in between.
    pub async fn run<F>(&mut self, retry: bool, mut emit: F) -> Acquisition
    where
        F: FnMut(AcquireEvent),
    {
        self.retry_count = 0;
        emit(AcquireEvent::Started);

        loop {
            let err = match self.source.fetch().await {
                Ok(quote) => {
                    self.retry_count = 0;
                    info!(author = quote.author(), "Quote fetched");
                    emit(AcquireEvent::Resolved(quote.clone()));
                    return Acquisition::Remote(quote);
                }
                Err(err) => err,
            };

            error!(
                attempt = self.retry_count + 1,
                kind = err.kind(),
                error = %err,
                "Quote fetch failed"
            );

            if retry && self.retry_count < self.policy.max_retries {
                self.retry_count += 1;
                warn!(attempt = self.retry_count, "Retrying quote fetch");
                emit(AcquireEvent::Retrying {
                    attempt: self.retry_count,
                    error: err.to_string(),
                });
                tokio::time::sleep(self.policy.delay).await;
                continue;
            }

            let quote = self.catalog.pick(&mut rand::thread_rng());
            warn!(author = quote.author(), "Showing local fallback quote");
            emit(AcquireEvent::FellBack {
                quote: quote.clone(),
                advisory: FALLBACK_ADVISORY.to_string(),
            });
            return Acquisition::Fallback { quote, error: err };
        }
    }
}
