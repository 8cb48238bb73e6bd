use indexmap::IndexMap;

use crate::generator::spec::{PathItem, SCHEMA_REF_PREFIX, Schema};

/// Lists the operations whose JSON response or JSON request body is exactly
/// `#/components/schemas/<schema_name>`.
///
/// Entries read `METHOD path - summary` and follow document order: paths,
/// then methods, then each response in order followed by the request body.
/// An operation that references the schema from several places is listed
/// once per place.
#[must_use]
pub fn find_endpoints_for_schema(paths: &IndexMap<String, PathItem>, schema_name: &str) -> Vec<String> {
  let search_ref = format!("{SCHEMA_REF_PREFIX}{schema_name}");
  let is_target = |schema: Option<&Schema>| schema.and_then(|s| s.ref_path.as_deref()) == Some(search_ref.as_str());

  let mut endpoints = vec![];
  for (path, item) in paths {
    for (method, operation) in &item.operations {
      let entry = || {
        format!(
          "{} {path} - {}",
          method.to_uppercase(),
          operation.summary.as_deref().unwrap_or_default()
        )
      };

      for response in operation.responses.values() {
        if is_target(response.json_schema()) {
          endpoints.push(entry());
        }
      }

      if is_target(operation.json_request_schema()) {
        endpoints.push(entry());
      }
    }
  }
  endpoints
}
