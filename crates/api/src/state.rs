use std::sync::Arc;

use quotex_delivery::{DeliveryChannel, QuoteClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The delivery
/// channel is dependency-injected here so tests can substitute a double.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the external random-quote API.
    pub quotes: Arc<QuoteClient>,
    /// The configured delivery channel (email or webhook).
    pub channel: Arc<dyn DeliveryChannel>,
}
