//! Shared response types for API handlers.

use quotex_core::Quote;
use serde::Serialize;

/// Success body for the send-quote endpoints:
/// `{ "message": .., "quote": { "quote": .., "author": .. } }`.
#[derive(Debug, Serialize)]
pub struct SendQuoteResponse {
    /// Confirmation message naming the delivery channel.
    pub message: String,
    /// The quote that was delivered.
    pub quote: Quote,
}
