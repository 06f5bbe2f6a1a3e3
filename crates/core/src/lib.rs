//! Domain types shared across the QUOTEX service.
//!
//! Holds the [`Quote`](quote::Quote) value object, the delivery target and
//! result types, and the domain error type. Keeps no I/O dependencies so the
//! delivery and API crates can both build on it.

pub mod error;
pub mod quote;

pub use error::CoreError;
pub use quote::{DeliveryResult, DeliveryTarget, Quote};
