//! Shared helpers for the API integration tests.
//!
//! Provides a recording [`MockChannel`] test double, a config factory, and
//! small request/body helpers. The app is always built through the
//! production [`build_app_router`] so tests exercise the same middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery) as `main.rs`.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use quotex_api::config::ServerConfig;
use quotex_api::router::build_app_router;
use quotex_api::state::AppState;
use quotex_core::{DeliveryResult, DeliveryTarget, Quote};
use quotex_delivery::{ChannelKind, DeliveryChannel, QuoteClient};

// ---------------------------------------------------------------------------
// Mock delivery channel
// ---------------------------------------------------------------------------

/// A test double for [`DeliveryChannel`] that records every delivery and
/// succeeds or fails on command.
pub struct MockChannel {
    kind: ChannelKind,
    fail: bool,
    pub deliveries: Mutex<Vec<(DeliveryTarget, Quote)>>,
}

impl MockChannel {
    /// A channel that accepts every delivery.
    pub fn succeeding(kind: ChannelKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            fail: false,
            deliveries: Mutex::new(Vec::new()),
        })
    }

    /// A channel that rejects every delivery.
    pub fn failing(kind: ChannelKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            fail: true,
            deliveries: Mutex::new(Vec::new()),
        })
    }

    /// Targets recorded so far.
    pub fn targets(&self) -> Vec<DeliveryTarget> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .map(|(target, _)| target.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl DeliveryChannel for MockChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    async fn deliver(&self, target: &DeliveryTarget, quote: &Quote) -> DeliveryResult {
        self.deliveries
            .lock()
            .unwrap()
            .push((target.clone(), quote.clone()));

        if self.fail {
            DeliveryResult::failed("mock channel rejected the delivery")
        } else {
            DeliveryResult::delivered(Some("mock-message-id".to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// The quote API URL points at `quote_url` (usually a wiremock server);
/// the fixed webhook/recipient targets are left unset unless a test fills
/// them in.
pub fn test_config(channel: ChannelKind, quote_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        channel,
        quote_api_url: quote_url.to_string(),
        webhook_url: None,
        recipient_email: None,
        sender_name: "quotex".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given configuration and delivery channel.
pub fn build_test_app(config: ServerConfig, channel: Arc<dyn DeliveryChannel>) -> Router {
    let quotes = Arc::new(QuoteClient::new(config.quote_api_url.clone()));
    let state = AppState {
        config: Arc::new(config.clone()),
        quotes,
        channel,
    };
    build_app_router(state, &config)
}

/// Shorthand for tests that never reach the pipeline (health, 404, CORS):
/// email channel, unreachable quote URL, always-succeeding mock.
pub fn build_default_app() -> Router {
    let config = test_config(ChannelKind::Email, "http://127.0.0.1:1/random");
    build_test_app(config, MockChannel::succeeding(ChannelKind::Email))
}

// ---------------------------------------------------------------------------
// Request / body helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
