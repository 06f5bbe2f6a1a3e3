//! The delivery channel abstraction.
//!
//! Handlers hold the configured channel as `Arc<dyn DeliveryChannel>` so the
//! email and webhook implementations (and test doubles) are interchangeable.

use std::str::FromStr;

use quotex_core::{CoreError, DeliveryResult, DeliveryTarget, Quote};

/// Which delivery channel the service is configured to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Webhook,
}

impl ChannelKind {
    /// Name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Webhook => "webhook",
        }
    }
}

impl FromStr for ChannelKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ChannelKind::Email),
            "webhook" => Ok(ChannelKind::Webhook),
            other => Err(CoreError::Config(format!(
                "Unknown delivery channel '{other}' (expected 'email' or 'webhook')"
            ))),
        }
    }
}

/// A mechanism that pushes one quote to one target.
///
/// Implementations never panic and never propagate errors: any failure is
/// logged and folded into the returned [`DeliveryResult`], which the handler
/// maps to an HTTP status. Exactly one attempt per call; retries are out of
/// scope.
#[async_trait::async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// The kind of channel, for logging and response messages.
    fn kind(&self) -> ChannelKind;

    /// Deliver `quote` to `target`, reporting success or failure.
    async fn deliver(&self, target: &DeliveryTarget, quote: &Quote) -> DeliveryResult;
}
