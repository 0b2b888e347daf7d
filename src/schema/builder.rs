//! Custom field schema builder
//!
//! Maps Sell custom-field definitions onto JSON Schema properties and merges
//! same-named fields across resource types. Every field type tag has exactly
//! one property shape, fixed at compile time by the exhaustive match in
//! [`custom_field_property`]. A field name that resolves to two different
//! shapes across resource types is a hard error: no partial schema is ever
//! returned, and no widening heuristic is applied.

use crate::error::{Error, Result};
use crate::schema::types::{JsonType, SchemaProperty};
use crate::sell::CustomFieldSource;
use crate::types::{CustomFieldType, ResourceType};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The fixed-shape address object used for `address` custom fields.
///
/// All sub-fields are optional strings.
pub fn address_property() -> SchemaProperty {
    let mut properties = BTreeMap::new();
    properties.insert(
        "line1".to_string(),
        SchemaProperty::nullable(JsonType::String)
            .with_description("Line 1 of the address e.g. number, street, suite, apt #, etc."),
    );
    properties.insert(
        "city".to_string(),
        SchemaProperty::nullable(JsonType::String).with_description("City name."),
    );
    properties.insert(
        "postal_code".to_string(),
        SchemaProperty::nullable(JsonType::String).with_description("Zip code or equivalent."),
    );
    properties.insert(
        "state".to_string(),
        SchemaProperty::nullable(JsonType::String).with_description("State name."),
    );
    properties.insert(
        "country".to_string(),
        SchemaProperty::nullable(JsonType::String).with_description("Country name."),
    );
    SchemaProperty::nullable_object(properties)
}

/// The fixed CustomFieldType → SchemaProperty table.
///
/// Custom fields are unset on most records, so every property is nullable.
/// Numbers, dates, and most other tags are carried as strings, matching how
/// the Sell API serializes custom field values on records.
pub fn custom_field_property(field_type: CustomFieldType) -> SchemaProperty {
    match field_type {
        CustomFieldType::Address => address_property(),
        CustomFieldType::Datetime => {
            SchemaProperty::nullable(JsonType::String).with_format("date-time")
        }
        CustomFieldType::MultiSelectList => {
            SchemaProperty::nullable_array(SchemaProperty::new(JsonType::String))
        }
        CustomFieldType::Bool
        | CustomFieldType::Date
        | CustomFieldType::Email
        | CustomFieldType::List
        | CustomFieldType::Number
        | CustomFieldType::Phone
        | CustomFieldType::String
        | CustomFieldType::Text
        | CustomFieldType::Url => SchemaProperty::nullable(JsonType::String),
    }
}

/// Parse a requested set of resource type names.
///
/// Validates the whole set against the known resource types before any
/// network access; any unrecognized name fails the call with the full
/// offending set for diagnosis.
pub fn parse_resource_types<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<ResourceType>> {
    let mut resources = BTreeSet::new();
    let mut invalid = false;

    for name in names {
        match name.as_ref().parse::<ResourceType>() {
            Ok(resource) => {
                resources.insert(resource);
            }
            Err(_) => invalid = true,
        }
    }

    if invalid {
        let requested = names
            .iter()
            .map(|n| format!("\"{}\"", n.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::invalid_resource_types(format!("{{{requested}}}")));
    }

    Ok(resources)
}

/// Build the merged custom-field schema for a set of resource types.
///
/// Fetches the custom field definitions of each resource type through
/// `source`, resolves each declared type tag via the fixed table, and merges
/// the results into one mapping from field name to schema property.
/// Resource types are processed in sorted order so conflict errors are
/// reproducible. An empty input set returns an empty mapping without any
/// fetch.
///
/// # Errors
///
/// - [`Error::UnknownFieldType`] if a definition declares a tag absent from
///   the table.
/// - [`Error::FieldConflict`] if the same field name resolves to two
///   structurally different properties.
/// - Transport errors from `source` propagate unchanged.
pub async fn build_custom_field_schema<S>(
    source: &S,
    resource_types: &BTreeSet<ResourceType>,
) -> Result<BTreeMap<String, SchemaProperty>>
where
    S: CustomFieldSource + ?Sized,
{
    let mut result = BTreeMap::new();

    for resource in resource_types {
        let definitions = source.get_custom_fields(*resource).await?;
        debug!(
            resource = %resource,
            count = definitions.len(),
            "fetched custom field definitions"
        );

        for definition in definitions {
            let Some(field_type) = CustomFieldType::parse(&definition.field_type) else {
                return Err(Error::unknown_field_type(
                    &definition.name,
                    &definition.field_type,
                ));
            };
            let property = custom_field_property(field_type);

            match result.entry(definition.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(property);
                }
                Entry::Occupied(existing) => {
                    if *existing.get() != property {
                        return Err(Error::field_conflict(&definition.name));
                    }
                }
            }
        }
    }

    Ok(result)
}
