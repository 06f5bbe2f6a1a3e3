//! Client for the external random-quote API.
//!
//! [`QuoteClient::fetch`] never fails outward: any transport error, non-2xx
//! status, or malformed body is logged and replaced with the fixed fallback
//! quote, so a quote always reaches the delivery channel.

use std::time::Duration;

use quotex_core::Quote;
use serde::Deserialize;

/// Default random-quote endpoint.
pub const DEFAULT_QUOTE_API_URL: &str = "https://api.quotable.io/random";

/// HTTP request timeout for a single fetch attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shape of the quote API response body.
#[derive(Debug, Deserialize)]
struct QuoteApiResponse {
    content: String,
    author: Option<String>,
}

/// Fetches random quotes from the configured quote API.
pub struct QuoteClient {
    client: reqwest::Client,
    url: String,
}

impl QuoteClient {
    /// Create a client pointing at `url`.
    ///
    /// The URL is injectable so tests can aim it at a mock server.
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch one random quote. Exactly one attempt; on any failure the
    /// fallback quote is returned instead of an error.
    pub async fn fetch(&self) -> Quote {
        match self.try_fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Quote fetch failed, using fallback");
                Quote::fallback()
            }
        }
    }

    /// Execute a single GET and map the body into a [`Quote`].
    async fn try_fetch(&self) -> Result<Quote, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body: QuoteApiResponse = response.json().await?;
        if body.content.trim().is_empty() {
            return Err(FetchError::EmptyContent);
        }

        Ok(Quote::new(body.content, body.author))
    }
}

/// Internal fetch failure; never leaves this module except as a log line.
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Quote API returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Quote API returned an empty quote")]
    EmptyContent,
}
