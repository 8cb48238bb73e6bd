use serde_json::json;

use crate::generator::spec::{CompositeOp, HttpMethod, ParameterLocation, Schema, SchemaDocument, SchemaKind};

#[test]
fn test_wrong_shapes_read_as_absent() {
  let doc = SchemaDocument::from_value(json!({
    "components": { "schemas": ["not", "a", "map"] },
    "paths": {
      "/a": {
        "get": {
          "summary": 42,
          "parameters": { "name": "x" },
          "requestBody": "nope",
          "responses": []
        }
      },
      "/b": "not a path item"
    }
  }))
  .unwrap();

  assert!(doc.schemas().is_none());
  let operations: Vec<_> = doc.operations().collect();
  assert_eq!(operations.len(), 1);
  let (path, method, operation) = operations[0];
  assert_eq!((path, method), ("/a", "get"));
  assert!(operation.summary.is_none());
  assert!(operation.parameters.is_empty());
  assert!(operation.json_request_schema().is_none());
  assert!(operation.responses.is_empty());
}

#[test]
fn test_missing_components_and_paths() {
  let doc = SchemaDocument::from_value(json!({ "openapi": "3.0.0" })).unwrap();
  assert!(doc.schemas().is_none());
  assert!(doc.paths.is_empty());

  let doc = SchemaDocument::from_value(json!({ "components": {} })).unwrap();
  assert!(doc.schemas().is_none());
}

#[test]
fn test_malformed_json_is_rejected() {
  assert!(SchemaDocument::from_slice(b"{ not json").is_err());
  assert!(SchemaDocument::from_slice(b"\"just a string\"").is_err());
}

#[test]
fn test_schema_order_is_preserved() {
  let doc = SchemaDocument::from_value(json!({
    "components": { "schemas": { "Zebra": {}, "apple": {}, "Mango": {} } }
  }))
  .unwrap();
  let names: Vec<&str> = doc.schemas().unwrap().keys().map(String::as_str).collect();
  assert_eq!(names, vec!["Zebra", "apple", "Mango"]);
}

#[test]
fn test_path_item_keeps_only_http_methods() {
  let doc = SchemaDocument::from_value(json!({
    "paths": {
      "/users": {
        "summary": "Users",
        "parameters": [],
        "servers": [],
        "post": {},
        "GET": {},
        "x-internal": {}
      }
    }
  }))
  .unwrap();

  let methods: Vec<&str> = doc.paths["/users"].operations.keys().map(String::as_str).collect();
  assert_eq!(methods, vec!["post", "GET"]);
  assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
  assert!("parameters".parse::<HttpMethod>().is_err());
}

#[test]
fn test_parameter_locations() {
  let doc = SchemaDocument::from_value(json!({
    "paths": {
      "/a": {
        "get": {
          "parameters": [
            { "name": "q", "in": "query" },
            { "name": "id", "in": "path" },
            { "name": "token", "in": "cookie" },
            { "name": "broken", "in": 7 }
          ]
        }
      }
    }
  }))
  .unwrap();

  let (_, _, operation) = doc.operations().next().unwrap();
  let locations: Vec<ParameterLocation> = operation.parameters.iter().map(|param| param.location).collect();
  assert_eq!(
    locations,
    vec![
      ParameterLocation::Query,
      ParameterLocation::Path,
      ParameterLocation::Other,
      ParameterLocation::Other
    ]
  );
  assert_eq!(operation.parameters_in(ParameterLocation::Query).count(), 1);
}

#[test]
fn test_schema_kind_precedence() {
  let reference = Schema::from_value(&json!({
    "$ref": "#/components/schemas/User",
    "type": "array",
    "items": { "type": "string" }
  }));
  assert!(matches!(reference.kind(), SchemaKind::Reference("#/components/schemas/User")));

  let array = Schema::from_value(&json!({
    "type": "array",
    "items": { "type": "string" },
    "x-enum-varnames": ["A"]
  }));
  assert!(matches!(array.kind(), SchemaKind::Array(_)));

  let array_without_items = Schema::from_value(&json!({ "type": "array", "x-enum-varnames": ["A"] }));
  assert!(matches!(array_without_items.kind(), SchemaKind::Enum(names) if names == ["A"]));

  let enum_over_type = Schema::from_value(&json!({ "type": "integer", "x-enum-varnames": ["One"] }));
  assert!(matches!(enum_over_type.kind(), SchemaKind::Enum(_)));

  assert!(matches!(
    Schema::from_value(&json!({ "type": "object" })).kind(),
    SchemaKind::Object(None)
  ));
  assert!(matches!(
    Schema::from_value(&json!({ "type": "null" })).kind(),
    SchemaKind::Unstructured
  ));
  assert!(matches!(Schema::from_value(&json!("string")).kind(), SchemaKind::Unstructured));
}

#[test]
fn test_schema_flags() {
  let composite = Schema::from_value(&json!({ "anyOf": [], "oneOf": [{}] }));
  assert!(composite.is_structured());
  assert_eq!(composite.composite().map(|c| c.op), Some(CompositeOp::OneOf));
  assert_eq!(CompositeOp::OneOf.to_string(), "oneOf");

  let empty_varnames = Schema::from_value(&json!({ "x-enum-varnames": [] }));
  assert!(!empty_varnames.is_enum());
  assert!(!empty_varnames.is_structured());

  let described = Schema::from_value(&json!({
    "description": "",
    "required": ["a", 3, "b"],
    "x-enum-comments": { "A": "", "B": "Bee" }
  }));
  assert!(described.description.is_none());
  assert!(described.is_required("a") && described.is_required("b"));
  assert_eq!(described.enum_comment("A"), None);
  assert_eq!(described.enum_comment("B"), Some("Bee"));
}
