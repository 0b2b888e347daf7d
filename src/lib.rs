//! # tap-zendesk-sell
//!
//! A Rust connector for the Zendesk Sell CRM API.
//!
//! Zendesk Sell lets users attach typed custom fields to deals, contacts,
//! leads, and prospects/customers. This crate discovers those custom-field
//! definitions, maps each declared field type onto a JSON Schema property,
//! and merges same-named fields across resource types into a single schema
//! for downstream pipeline ingestion. Conflicting definitions are a hard
//! error, never silently widened.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::BTreeSet;
//! use tap_zendesk_sell::config::TapConfig;
//! use tap_zendesk_sell::schema::build_custom_field_schema;
//! use tap_zendesk_sell::sell::SellClient;
//! use tap_zendesk_sell::types::ResourceType;
//! use tap_zendesk_sell::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = TapConfig::from_file("config.json")?;
//!     let client = SellClient::new(&config)?;
//!
//!     let resources: BTreeSet<ResourceType> = ResourceType::ALL.iter().copied().collect();
//!     let schema = build_custom_field_schema(&client, &resources).await?;
//!
//!     for (name, property) in &schema {
//!         println!("{name}: {property:?}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the connector
pub mod error;

/// Common types: resource types, custom field definitions
pub mod types;

/// Tap configuration loaded from JSON
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// Zendesk Sell API client
pub mod sell;

/// Schema property types and the custom-field schema builder
pub mod schema;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use types::{CustomFieldDefinition, CustomFieldType, ResourceType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
