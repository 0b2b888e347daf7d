//! Zendesk Sell API client
//!
//! [`SellClient`] talks to the Sell v2 REST API; [`CustomFieldSource`] is the
//! seam the schema builder consumes, so tests and future extraction layers
//! can substitute their own source.

mod client;

pub use client::{CustomFieldSource, SellClient, PER_PAGE};
