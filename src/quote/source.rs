use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::debug;

use super::error::FetchError;
use super::model::Quote;

/// Random-quote endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.quotable.io/random";

/// One attempt at getting a quote from somewhere remote.
///
/// Implementations own their timeout: a call that outlives it must resolve to
/// [`FetchError::Timeout`] and drop the in-flight request.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Quote, FetchError>> + Send;
}

/// Wire shape of the endpoint's JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotePayload {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuotePayload {
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    pub fn into_quote(self) -> Result<Quote, FetchError> {
        Quote::new(self.content, self.author.as_deref())
            .ok_or_else(|| FetchError::Parse("empty `content` field".to_string()))
    }
}

/// GETs a JSON quote over HTTP with a per-attempt timeout.
pub struct HttpQuoteSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("inspirex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    async fn request(&self) -> Result<Quote, FetchError> {
        debug!(url = %self.url, "Requesting quote");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { source })?;

        QuotePayload::parse(&body)?.into_quote()
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> impl Future<Output = Result<Quote, FetchError>> + Send {
        async move {
            // Dropping the request future on elapse cancels the connection.
            match timeout(self.timeout, self.request()).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }),
            }
        }
    }
}
