//! Quote and delivery value objects.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Author substituted when the upstream quote source omits one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A short text attributed to an author, fetched from the external quote
/// source. Immutable once constructed; created per request and discarded
/// after the response is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text. Never empty.
    #[serde(rename = "quote")]
    pub text: String,
    /// The attributed author. Never empty; defaults to `"Unknown"`.
    pub author: String,
}

impl Quote {
    /// Build a quote, substituting `"Unknown"` for an absent or empty author.
    pub fn new(text: impl Into<String>, author: Option<String>) -> Self {
        let author = match author {
            Some(a) if !a.trim().is_empty() => a,
            _ => UNKNOWN_AUTHOR.to_string(),
        };
        Self {
            text: text.into(),
            author,
        }
    }

    /// The fixed substitute quote used when the external quote source is
    /// unavailable.
    pub fn fallback() -> Self {
        Self {
            text: "Keep pushing forward!".to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
        }
    }
}

/// Destination for a single delivery, resolved fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// A recipient email address. Must contain `@`.
    Email(String),
    /// A webhook endpoint URL from process configuration.
    Webhook(String),
}

impl DeliveryTarget {
    /// Validate and wrap an email address.
    ///
    /// Only the `@` shape check from the source contract; full RFC 5322
    /// validation happens in the email channel when the address is parsed.
    pub fn email(address: impl Into<String>) -> Result<Self, CoreError> {
        let address = address.into();
        if !address.contains('@') {
            return Err(CoreError::Validation(format!(
                "'{address}' is not a valid email address"
            )));
        }
        Ok(Self::Email(address))
    }
}

/// Outcome of a single delivery attempt. Ephemeral; used only to shape the
/// HTTP response.
#[derive(Debug, Clone)]
pub struct DeliveryResult {
    /// Whether the channel accepted the quote.
    pub delivered: bool,
    /// Provider message identifier, when the channel reports one.
    pub message_id: Option<String>,
    /// Failure detail for logging; never echoed verbatim to clients.
    pub error_detail: Option<String>,
}

impl DeliveryResult {
    /// A successful delivery, optionally carrying a provider message id.
    pub fn delivered(message_id: Option<String>) -> Self {
        Self {
            delivered: true,
            message_id,
            error_detail: None,
        }
    }

    /// A failed delivery with detail for server-side logging.
    pub fn failed(error_detail: impl Into<String>) -> Self {
        Self {
            delivered: false,
            message_id: None,
            error_detail: Some(error_detail.into()),
        }
    }
}
