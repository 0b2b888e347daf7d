//! Custom field schema module
//!
//! Maps Sell custom-field definitions onto JSON Schema properties via a
//! fixed type table and merges same-named fields across resource types,
//! rejecting conflicting definitions.

mod builder;
mod types;

pub use builder::{
    address_property, build_custom_field_schema, custom_field_property, parse_resource_types,
};
pub use types::{JsonSchema, JsonType, JsonTypeOrArray, SchemaProperty};

#[cfg(test)]
mod tests;
