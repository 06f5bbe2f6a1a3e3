//! Webhook delivery via HTTP POST.
//!
//! [`WebhookChannel`] sends the quote as a JSON notification to an external
//! URL. Exactly one attempt per delivery; a failure is logged and reported
//! in the [`DeliveryResult`] so the handler can surface a 500. This is a
//! deliberate, uniform policy with the email channel rather than the
//! fire-and-forget behavior some callers might expect.

use std::time::Duration;

use quotex_core::{DeliveryResult, DeliveryTarget, Quote};
use serde::Serialize;

use crate::channel::{ChannelKind, DeliveryChannel};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Event name carried in every webhook notification.
const EVENT_NAME: &str = "quote.delivered";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON body posted to the webhook endpoint.
#[derive(Debug, Serialize)]
struct WebhookPayload {
    event_name: &'static str,
    message: String,
    status: &'static str,
    username: String,
}

impl WebhookPayload {
    fn for_quote(quote: &Quote, username: &str) -> Self {
        Self {
            event_name: EVENT_NAME,
            message: format!("{} — {}", quote.text, quote.author),
            status: "success",
            username: username.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// WebhookChannel
// ---------------------------------------------------------------------------

/// Delivers quotes to an external webhook endpoint.
pub struct WebhookChannel {
    client: reqwest::Client,
    username: String,
}

impl WebhookChannel {
    /// Create the channel with a pre-configured HTTP client.
    ///
    /// `username` identifies the sending service in the notification body.
    pub fn new(username: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            username: username.into(),
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, url: &str, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DeliveryChannel for WebhookChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    async fn deliver(&self, target: &DeliveryTarget, quote: &Quote) -> DeliveryResult {
        let DeliveryTarget::Webhook(url) = target else {
            tracing::error!("Webhook channel received a non-webhook target");
            return DeliveryResult::failed("Delivery target is not a webhook URL");
        };

        let payload = WebhookPayload::for_quote(quote, &self.username);

        match self.try_send(url, &payload).await {
            Ok(()) => {
                tracing::info!(url = %url, "Quote webhook delivered");
                DeliveryResult::delivered(None)
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Webhook delivery failed");
                DeliveryResult::failed(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
