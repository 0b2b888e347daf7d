//! Schema builder tests

use super::*;
use crate::error::Error;
use crate::sell::CustomFieldSource;
use crate::types::{CustomFieldDefinition, CustomFieldType, ResourceType};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use test_case::test_case;

/// In-memory source of custom field definitions, recording every fetch
struct StubSource {
    fields: BTreeMap<ResourceType, Vec<CustomFieldDefinition>>,
    calls: Mutex<Vec<ResourceType>>,
}

impl StubSource {
    fn new(fields: Vec<(ResourceType, Vec<CustomFieldDefinition>)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CustomFieldSource for StubSource {
    async fn get_custom_fields(
        &self,
        resource: ResourceType,
    ) -> crate::error::Result<Vec<CustomFieldDefinition>> {
        self.calls.lock().unwrap().push(resource);
        Ok(self.fields.get(&resource).cloned().unwrap_or_default())
    }
}

fn def(name: &str, field_type: &str) -> CustomFieldDefinition {
    CustomFieldDefinition::new(name, field_type)
}

fn all_resources() -> BTreeSet<ResourceType> {
    ResourceType::ALL.iter().copied().collect()
}

// ============================================================================
// Fixed type table
// ============================================================================

#[test_case(CustomFieldType::Bool)]
#[test_case(CustomFieldType::Date)]
#[test_case(CustomFieldType::Email)]
#[test_case(CustomFieldType::List)]
#[test_case(CustomFieldType::Number)]
#[test_case(CustomFieldType::Phone)]
#[test_case(CustomFieldType::String)]
#[test_case(CustomFieldType::Text)]
#[test_case(CustomFieldType::Url)]
fn test_string_backed_types_map_to_nullable_string(field_type: CustomFieldType) {
    let property = custom_field_property(field_type);
    assert_eq!(property, SchemaProperty::nullable(JsonType::String));
}

#[test]
fn test_datetime_maps_to_formatted_string() {
    let property = custom_field_property(CustomFieldType::Datetime);
    assert_eq!(property.json_type.primary_type(), Some(&JsonType::String));
    assert!(property.is_nullable());
    assert_eq!(property.format, Some("date-time".to_string()));
}

#[test]
fn test_multi_select_list_maps_to_string_array() {
    let property = custom_field_property(CustomFieldType::MultiSelectList);
    assert_eq!(property.json_type.primary_type(), Some(&JsonType::Array));
    assert!(property.is_nullable());

    let items = property.items.as_ref().unwrap();
    assert_eq!(items.json_type.primary_type(), Some(&JsonType::String));
}

#[test]
fn test_address_maps_to_fixed_shape_object() {
    let property = custom_field_property(CustomFieldType::Address);
    assert_eq!(property.json_type.primary_type(), Some(&JsonType::Object));
    assert!(property.is_nullable());
    assert_eq!(property.additional_properties, Some(false));

    let nested = property.properties.as_ref().unwrap();
    let expected: Vec<&str> = vec!["city", "country", "line1", "postal_code", "state"];
    let actual: Vec<&str> = nested.keys().map(String::as_str).collect();
    assert_eq!(actual, expected);

    for sub in nested.values() {
        assert_eq!(sub.json_type.primary_type(), Some(&JsonType::String));
        assert!(sub.is_nullable());
    }
}

// ============================================================================
// Resource type set validation
// ============================================================================

#[test]
fn test_parse_resource_types_accepts_known_subset() {
    let resources = parse_resource_types(&["deal", "contact"]).unwrap();
    let expected: BTreeSet<_> = [ResourceType::Contact, ResourceType::Deal]
        .into_iter()
        .collect();
    assert_eq!(resources, expected);
}

#[test]
fn test_parse_resource_types_accepts_all() {
    let names: Vec<&str> = ResourceType::ALL.iter().map(|r| r.as_str()).collect();
    let resources = parse_resource_types(&names).unwrap();
    assert_eq!(resources, all_resources());
}

#[test]
fn test_parse_resource_types_rejects_unknown_naming_set() {
    let err = parse_resource_types(&["deal", "company"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "{\"deal\", \"company\"} is not a valid resource type set"
    );
}

#[test]
fn test_parse_resource_types_empty_is_empty_set() {
    let resources = parse_resource_types::<&str>(&[]).unwrap();
    assert!(resources.is_empty());
}

// ============================================================================
// Schema building and merging
// ============================================================================

#[tokio::test]
async fn test_empty_resource_set_returns_empty_without_fetch() {
    let source = StubSource::empty();
    let schema = build_custom_field_schema(&source, &BTreeSet::new())
        .await
        .unwrap();

    assert!(schema.is_empty());
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn test_resource_with_no_custom_fields_returns_empty() {
    let source = StubSource::new(vec![(ResourceType::Deal, Vec::new())]);
    let resources: BTreeSet<_> = [ResourceType::Deal].into_iter().collect();

    let schema = build_custom_field_schema(&source, &resources).await.unwrap();

    assert!(schema.is_empty());
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn test_build_schema_single_resource() {
    let source = StubSource::new(vec![(
        ResourceType::Deal,
        vec![
            def("priority", "string"),
            def("closing_on", "datetime"),
            def("regions", "multi_select_list"),
            def("office", "address"),
        ],
    )]);
    let resources: BTreeSet<_> = [ResourceType::Deal].into_iter().collect();

    let schema = build_custom_field_schema(&source, &resources).await.unwrap();

    assert_eq!(schema.len(), 4);
    assert_eq!(
        schema["priority"],
        custom_field_property(CustomFieldType::String)
    );
    assert_eq!(
        schema["closing_on"],
        custom_field_property(CustomFieldType::Datetime)
    );
    assert_eq!(
        schema["regions"],
        custom_field_property(CustomFieldType::MultiSelectList)
    );
    assert_eq!(schema["office"], address_property());
}

#[tokio::test]
async fn test_same_resolved_type_across_resources_is_not_a_conflict() {
    // "string" and "number" both resolve to a nullable string property
    let source = StubSource::new(vec![
        (ResourceType::Deal, vec![def("priority", "string")]),
        (ResourceType::Contact, vec![def("priority", "number")]),
    ]);
    let resources: BTreeSet<_> = [ResourceType::Deal, ResourceType::Contact]
        .into_iter()
        .collect();

    let schema = build_custom_field_schema(&source, &resources).await.unwrap();

    assert_eq!(schema.len(), 1);
    assert_eq!(schema["priority"], SchemaProperty::nullable(JsonType::String));
}

#[tokio::test]
async fn test_conflicting_resolved_types_fail_naming_field() {
    // "string" resolves to string, "multi_select_list" to array-of-string
    let source = StubSource::new(vec![
        (ResourceType::Deal, vec![def("priority", "string")]),
        (
            ResourceType::Contact,
            vec![def("priority", "multi_select_list")],
        ),
    ]);
    let resources: BTreeSet<_> = [ResourceType::Deal, ResourceType::Contact]
        .into_iter()
        .collect();

    let err = build_custom_field_schema(&source, &resources)
        .await
        .unwrap_err();

    match err {
        Error::FieldConflict { field } => assert_eq!(field, "priority"),
        other => panic!("expected FieldConflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_field_type_fails_without_fallback() {
    let source = StubSource::new(vec![(
        ResourceType::Lead,
        vec![def("score", "ranking")],
    )]);
    let resources: BTreeSet<_> = [ResourceType::Lead].into_iter().collect();

    let err = build_custom_field_schema(&source, &resources)
        .await
        .unwrap_err();

    match err {
        Error::UnknownFieldType { field, field_type } => {
            assert_eq!(field, "score");
            assert_eq!(field_type, "ranking");
        }
        other => panic!("expected UnknownFieldType, got {other:?}"),
    }
}

#[tokio::test]
async fn test_merge_is_order_independent() {
    let fields = vec![
        (ResourceType::Deal, vec![def("a", "string"), def("b", "bool")]),
        (ResourceType::Lead, vec![def("b", "bool"), def("c", "url")]),
    ];

    let forward = StubSource::new(fields.clone());
    let reverse = StubSource::new(fields.into_iter().rev().collect());

    // BTreeSet iteration order is fixed regardless of insertion order
    let set_a: BTreeSet<_> = [ResourceType::Deal, ResourceType::Lead].into_iter().collect();
    let set_b: BTreeSet<_> = [ResourceType::Lead, ResourceType::Deal].into_iter().collect();

    let schema_a = build_custom_field_schema(&forward, &set_a).await.unwrap();
    let schema_b = build_custom_field_schema(&reverse, &set_b).await.unwrap();

    assert_eq!(schema_a, schema_b);
    assert_eq!(schema_a.len(), 3);
}

#[tokio::test]
async fn test_build_schema_is_idempotent() {
    let source = StubSource::new(vec![
        (ResourceType::Deal, vec![def("priority", "string")]),
        (ResourceType::Contact, vec![def("birthday", "date")]),
    ]);
    let resources: BTreeSet<_> = [ResourceType::Deal, ResourceType::Contact]
        .into_iter()
        .collect();

    let first = build_custom_field_schema(&source, &resources).await.unwrap();
    let second = build_custom_field_schema(&source, &resources).await.unwrap();

    assert_eq!(first, second);
    // Definitions are fetched fresh on each call, never cached
    assert_eq!(source.call_count(), 4);
}

#[tokio::test]
async fn test_duplicate_name_within_one_resource_checks_consistency() {
    let source = StubSource::new(vec![(
        ResourceType::Deal,
        vec![def("tag", "string"), def("tag", "multi_select_list")],
    )]);
    let resources: BTreeSet<_> = [ResourceType::Deal].into_iter().collect();

    let err = build_custom_field_schema(&source, &resources)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FieldConflict { .. }));
}

// ============================================================================
// JsonSchema document
// ============================================================================

#[test]
fn test_schema_document_serialization() {
    let mut properties = BTreeMap::new();
    properties.insert(
        "priority".to_string(),
        custom_field_property(CustomFieldType::String),
    );
    properties.insert(
        "due".to_string(),
        custom_field_property(CustomFieldType::Datetime),
    );

    let document = JsonSchema::new()
        .with_title("custom_fields")
        .with_properties(properties);
    let json = document.to_json();

    assert_eq!(json["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(json["type"], "object");
    assert_eq!(json["title"], "custom_fields");
    assert_eq!(
        json["properties"]["priority"]["type"],
        serde_json::json!(["string", "null"])
    );
    assert_eq!(json["properties"]["due"]["format"], "date-time");
}

#[test]
fn test_schema_property_round_trip() {
    let property = address_property();
    let json = serde_json::to_value(&property).unwrap();
    let back: SchemaProperty = serde_json::from_value(json).unwrap();
    assert_eq!(back, property);
}

#[test]
fn test_nullable_type_helpers() {
    let nullable = JsonTypeOrArray::nullable(JsonType::String);
    assert!(nullable.is_nullable());
    assert_eq!(nullable.primary_type(), Some(&JsonType::String));

    let plain = JsonTypeOrArray::single(JsonType::Array);
    assert!(!plain.is_nullable());
    assert_eq!(plain.primary_type(), Some(&JsonType::Array));
}
