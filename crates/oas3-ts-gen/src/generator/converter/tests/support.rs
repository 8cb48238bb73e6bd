use serde_json::Value;

use crate::generator::spec::{Schema, SchemaDocument};

pub(super) fn schema(value: Value) -> Schema {
  Schema::from_value(&value)
}

pub(super) fn document(value: Value) -> SchemaDocument {
  SchemaDocument::from_value(value).expect("failed to decode test document")
}
