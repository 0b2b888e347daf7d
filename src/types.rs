//! Common types used throughout the connector
//!
//! Domain enums for the Zendesk Sell API plus shared utility types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Resource Type
// ============================================================================

/// A category of Sell entity that can carry custom fields.
///
/// The variant order defines the processing order for schema merging, so
/// conflict errors are reproducible regardless of how the caller assembled
/// the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Contact,
    Deal,
    Lead,
    ProspectAndCustomer,
}

impl ResourceType {
    /// All resource types known to carry custom fields
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Contact,
        ResourceType::Deal,
        ResourceType::Lead,
        ResourceType::ProspectAndCustomer,
    ];

    /// The API path segment for this resource type
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Contact => "contact",
            ResourceType::Deal => "deal",
            ResourceType::Lead => "lead",
            ResourceType::ProspectAndCustomer => "prospect_and_customer",
        }
    }

    /// Endpoint path for this resource's custom field definitions
    pub fn custom_fields_path(&self) -> String {
        format!("/{}/custom_fields", self.as_str())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(ResourceType::Contact),
            "deal" => Ok(ResourceType::Deal),
            "lead" => Ok(ResourceType::Lead),
            "prospect_and_customer" => Ok(ResourceType::ProspectAndCustomer),
            other => Err(Error::invalid_resource_types(format!("{{\"{other}\"}}"))),
        }
    }
}

// ============================================================================
// Custom Field Type
// ============================================================================

/// Declared type of a Sell custom field.
///
/// Each tag maps to exactly one schema property; the mapping lives in
/// [`crate::schema::custom_field_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    Address,
    Bool,
    Date,
    Datetime,
    Email,
    List,
    MultiSelectList,
    Number,
    Phone,
    String,
    Text,
    Url,
}

impl CustomFieldType {
    /// The wire tag for this field type
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomFieldType::Address => "address",
            CustomFieldType::Bool => "bool",
            CustomFieldType::Date => "date",
            CustomFieldType::Datetime => "datetime",
            CustomFieldType::Email => "email",
            CustomFieldType::List => "list",
            CustomFieldType::MultiSelectList => "multi_select_list",
            CustomFieldType::Number => "number",
            CustomFieldType::Phone => "phone",
            CustomFieldType::String => "string",
            CustomFieldType::Text => "text",
            CustomFieldType::Url => "url",
        }
    }

    /// Parse a wire tag, returning `None` for tags absent from the table
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "address" => Some(CustomFieldType::Address),
            "bool" => Some(CustomFieldType::Bool),
            "date" => Some(CustomFieldType::Date),
            "datetime" => Some(CustomFieldType::Datetime),
            "email" => Some(CustomFieldType::Email),
            "list" => Some(CustomFieldType::List),
            "multi_select_list" => Some(CustomFieldType::MultiSelectList),
            "number" => Some(CustomFieldType::Number),
            "phone" => Some(CustomFieldType::Phone),
            "string" => Some(CustomFieldType::String),
            "text" => Some(CustomFieldType::Text),
            "url" => Some(CustomFieldType::Url),
            _ => None,
        }
    }
}

impl fmt::Display for CustomFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Custom Field Definition
// ============================================================================

/// A custom field definition as returned by the Sell API.
///
/// The type tag stays a raw string so that a tag the connector does not
/// recognize surfaces as [`Error::UnknownFieldType`] with the offending
/// value, rather than failing opaquely during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDefinition {
    /// Unique field id
    #[serde(default)]
    pub id: Option<u64>,

    /// User-chosen field name
    pub name: String,

    /// Declared type tag (e.g. "string", "multi_select_list")
    #[serde(rename = "type")]
    pub field_type: String,
}

impl CustomFieldDefinition {
    /// Convenience constructor, mainly for tests
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
