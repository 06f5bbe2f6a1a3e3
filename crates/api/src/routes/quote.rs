//! Route definitions for the `/send-quote` resource.
//!
//! ```text
//! POST /send-quote  -> send_quote        (target from request body)
//! GET  /send-quote  -> send_quote_fixed  (target from configuration)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::quote;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/send-quote",
        get(quote::send_quote_fixed).post(quote::send_quote),
    )
}
