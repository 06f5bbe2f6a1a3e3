//! Quote fetching and outbound delivery channels.
//!
//! This crate provides the two halves of the delivery pipeline: the
//! [`QuoteClient`](quote_source::QuoteClient) that fetches a random quote
//! from the external quote API (with a guaranteed fallback), and the
//! [`DeliveryChannel`](channel::DeliveryChannel) implementations that push a
//! quote to a recipient via SMTP email or an HTTP webhook.

pub mod channel;
pub mod email;
pub mod quote_source;
pub mod webhook;

pub use channel::{ChannelKind, DeliveryChannel};
pub use email::{EmailChannel, EmailConfig};
pub use quote_source::QuoteClient;
pub use webhook::WebhookChannel;
