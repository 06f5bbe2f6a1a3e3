//! Email delivery via SMTP.
//!
//! [`EmailChannel`] wraps the `lettre` async SMTP transport to send the
//! quote as a small HTML document. Configuration is loaded from environment
//! variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns
//! `None` and the email channel cannot be selected.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use quotex_core::{DeliveryResult, DeliveryTarget, Quote};

use crate::channel::{ChannelKind, DeliveryChannel};

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Subject line for every quote email.
const SUBJECT: &str = "Daily Quote";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The resolved target was not an email address.
    #[error("Delivery target is not an email address")]
    WrongTarget,
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Configuration for the SMTP email channel.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Sender account identity, also used as the RFC 5322 "From" address.
    pub smtp_user: String,
    /// Application-scoped secret for the sender account.
    pub smtp_password: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable        | Required | Default |
    /// |-----------------|----------|---------|
    /// | `SMTP_HOST`     | yes      | —       |
    /// | `SMTP_PORT`     | no       | `587`   |
    /// | `SMTP_USER`     | yes      | —       |
    /// | `SMTP_PASSWORD` | yes      | —       |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: std::env::var("SMTP_USER").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailChannel
// ---------------------------------------------------------------------------

/// Sends quotes as HTML emails through an SMTP relay.
///
/// The transport is constructed once and reused across requests; it is
/// stateless between sends. Certificate validation is always on.
pub struct EmailChannel {
    config: EmailConfig,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailChannel {
    /// Build the channel and its STARTTLS transport from configuration.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        Ok(Self { config, mailer })
    }

    async fn send(&self, to_email: &str, quote: &Quote) -> Result<Option<String>, EmailError> {
        let email = Message::builder()
            .from(self.config.smtp_user.parse()?)
            .to(to_email.parse()?)
            .subject(SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(render_html(quote))
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let response = self.mailer.send(email).await?;

        // First line of the SMTP response doubles as the provider message id.
        let message_id = response.message().next().map(|line| line.to_string());
        Ok(message_id)
    }
}

#[async_trait::async_trait]
impl DeliveryChannel for EmailChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn deliver(&self, target: &DeliveryTarget, quote: &Quote) -> DeliveryResult {
        let DeliveryTarget::Email(address) = target else {
            tracing::error!("Email channel received a non-email target");
            return DeliveryResult::failed(EmailError::WrongTarget.to_string());
        };

        match self.send(address, quote).await {
            Ok(message_id) => {
                tracing::info!(to = %address, message_id = ?message_id, "Quote email sent");
                DeliveryResult::delivered(message_id)
            }
            Err(e) => {
                tracing::error!(to = %address, error = %e, "Failed to send quote email");
                DeliveryResult::failed(e.to_string())
            }
        }
    }
}

/// Render the quote as the HTML email body: the quote text in an indented,
/// italic blockquote and the attribution right-aligned and bold.
fn render_html(quote: &Quote) -> String {
    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; ",
            "margin: 0 auto; padding: 20px;\">\n",
            "  <h2>Your Daily Quote</h2>\n",
            "  <blockquote style=\"border-left: 4px solid #ccc; ",
            "padding-left: 15px; font-style: italic;\">\n",
            "    \"{text}\"\n",
            "  </blockquote>\n",
            "  <p style=\"text-align: right; font-weight: bold;\">— {author}</p>\n",
            "</div>"
        ),
        text = quote.text,
        author = quote.author,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_html_embeds_text_and_author() {
        let quote = Quote::new("Stay curious.", Some("Ada Lovelace".to_string()));
        let html = render_html(&quote);

        assert!(html.contains("\"Stay curious.\""));
        assert!(html.contains("— Ada Lovelace"));
    }

    #[test]
    fn render_html_styles_attribution_right_aligned_and_bold() {
        let quote = Quote::fallback();
        let html = render_html(&quote);

        let attribution = html
            .lines()
            .find(|l| l.contains("— Unknown"))
            .expect("attribution line present");
        assert!(attribution.contains("text-align: right"));
        assert!(attribution.contains("font-weight: bold"));
    }

    #[test]
    fn render_html_indents_quote_block() {
        let html = render_html(&Quote::fallback());
        assert!(html.contains("<blockquote"));
        assert!(html.contains("padding-left: 15px"));
        assert!(html.contains("font-style: italic"));
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[tokio::test]
    async fn deliver_rejects_webhook_target() {
        let channel = EmailChannel::new(EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_user: "sender@example.com".to_string(),
            smtp_password: "app-secret".to_string(),
        })
        .unwrap();

        let target = DeliveryTarget::Webhook("http://example.com/hook".to_string());
        let result = channel.deliver(&target, &Quote::fallback()).await;

        assert!(!result.delivered);
        assert!(result.message_id.is_none());
    }
}
