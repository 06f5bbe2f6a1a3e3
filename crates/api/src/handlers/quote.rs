//! Handlers for the `/send-quote` resource.
//!
//! Each request runs the same stateless pipeline: resolve the delivery
//! target, fetch a quote (the quote client never fails outward), deliver
//! through the configured channel, and map the outcome to an HTTP response.
//! Both channels block the response on delivery: a failed send is a 500.

use axum::extract::State;
use axum::Json;
use quotex_core::DeliveryTarget;
use quotex_delivery::ChannelKind;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::SendQuoteResponse;
use crate::state::AppState;

/// Settings label that carries the recipient address.
const USER_EMAIL_LABEL: &str = "user email";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// One entry of the structured `settings` payload.
#[derive(Debug, Deserialize)]
pub struct SettingEntry {
    pub label: String,
    #[serde(default)]
    pub default: Option<String>,
}

/// Body of `POST /send-quote`.
///
/// Two shapes are accepted: the structured `{"settings": [{label, default}]}`
/// payload, where the recipient is the entry labeled "user email"
/// (case-insensitive), and the simple `{"email": ".."}` body.
#[derive(Debug, Deserialize)]
pub struct SendQuoteRequest {
    #[serde(default)]
    pub settings: Option<Vec<SettingEntry>>,
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Target resolution
// ---------------------------------------------------------------------------

/// Resolve the recipient address from the request body.
fn resolve_body_target(request: &SendQuoteRequest) -> Result<DeliveryTarget, AppError> {
    if let Some(settings) = &request.settings {
        let address = settings
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(USER_EMAIL_LABEL))
            .and_then(|entry| entry.default.as_deref())
            .filter(|addr| !addr.trim().is_empty());

        return match address {
            Some(addr) => Ok(DeliveryTarget::email(addr)?),
            None => Err(AppError::BadRequest(
                "User Email not provided in settings".to_string(),
            )),
        };
    }

    match request.email.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(addr) => Ok(DeliveryTarget::email(addr)?),
        None => Err(AppError::BadRequest(
            "Missing 'email' field in request body".to_string(),
        )),
    }
}

/// Resolve the fixed delivery target from configuration.
///
/// Used by `GET /send-quote` (both channels) and by `POST /send-quote` when
/// the webhook channel is configured (the webhook endpoint is never taken
/// from the request).
fn fixed_target(state: &AppState) -> Result<DeliveryTarget, AppError> {
    match state.config.channel {
        ChannelKind::Email => match &state.config.recipient_email {
            Some(addr) => Ok(DeliveryTarget::email(addr.clone())?),
            None => Err(AppError::InternalError(
                "QUOTE_RECIPIENT is not configured".to_string(),
            )),
        },
        ChannelKind::Webhook => match &state.config.webhook_url {
            Some(url) => Ok(DeliveryTarget::Webhook(url.clone())),
            None => Err(AppError::InternalError(
                "WEBHOOK_URL is not configured".to_string(),
            )),
        },
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /send-quote
///
/// Delivers a fresh quote to the target named in the request body. With the
/// webhook channel configured, the body is accepted but the target always
/// comes from configuration.
pub async fn send_quote(
    State(state): State<AppState>,
    Json(request): Json<SendQuoteRequest>,
) -> AppResult<Json<SendQuoteResponse>> {
    let target = match state.config.channel {
        ChannelKind::Email => resolve_body_target(&request)?,
        ChannelKind::Webhook => fixed_target(&state)?,
    };

    deliver_quote(&state, target).await
}

/// GET /send-quote
///
/// Delivers a fresh quote to the fixed target from configuration.
pub async fn send_quote_fixed(
    State(state): State<AppState>,
) -> AppResult<Json<SendQuoteResponse>> {
    let target = fixed_target(&state)?;
    deliver_quote(&state, target).await
}

/// Fetch a quote and push it through the configured channel.
async fn deliver_quote(
    state: &AppState,
    target: DeliveryTarget,
) -> AppResult<Json<SendQuoteResponse>> {
    let quote = state.quotes.fetch().await;

    let result = state.channel.deliver(&target, &quote).await;
    if !result.delivered {
        return Err(AppError::DeliveryFailed(
            result
                .error_detail
                .unwrap_or_else(|| "Unknown delivery error".to_string()),
        ));
    }

    Ok(Json(SendQuoteResponse {
        message: format!("Quote sent via {}", state.channel.kind().as_str()),
        quote,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
