//! Route definitions for the QUOTEX HTTP surface.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod quote;

/// All application routes, mounted at the root.
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(quote::router())
}
