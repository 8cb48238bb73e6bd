//! Typed view of the OpenAPI JSON document consumed by the generator.
//!
//! The document is decoded once. Every field is read leniently: a value of the
//! wrong JSON shape is treated as absent instead of failing the whole decode.
//! Inside maps and lists only the malformed entry is dropped, so a single bad
//! response or parameter never hides its well-formed siblings. Key order of the source document is preserved for every
//! mapping that drives output order.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
pub const JSON_MEDIA_TYPE: &str = "application/json";

const ENUM_VARNAMES_KEY: &str = "x-enum-varnames";
const ENUM_COMMENTS_KEY: &str = "x-enum-comments";

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  let value = Value::deserialize(deserializer)?;
  Ok(T::deserialize(value).unwrap_or_default())
}

/// Decodes a map entry by entry, dropping entries that fail to decode.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let entries: IndexMap<String, Value> = lenient(deserializer)?;
  Ok(
    entries
      .into_iter()
      .filter_map(|(key, value)| T::deserialize(value).ok().map(|entry| (key, entry)))
      .collect(),
  )
}

/// Decodes a list element by element, dropping elements that fail to decode.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let elements: Vec<Value> = lenient(deserializer)?;
  Ok(elements.into_iter().filter_map(|value| T::deserialize(value).ok()).collect())
}

/// Root of an OpenAPI document, reduced to what type generation reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
  #[serde(default, deserialize_with = "lenient")]
  pub components: Option<Components>,
  #[serde(default, deserialize_with = "lenient")]
  pub paths: IndexMap<String, PathItem>,
}

impl SchemaDocument {
  pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
    serde_json::from_slice(bytes)
  }

  pub fn from_value(value: Value) -> serde_json::Result<Self> {
    serde_json::from_value(value)
  }

  /// Named schemas under `components.schemas`, if the document declares them.
  #[must_use]
  pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
    self.components.as_ref().and_then(|components| components.schemas.as_ref())
  }

  /// Iterates every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .operations
        .iter()
        .map(move |(method, operation)| (path.as_str(), method.as_str(), operation))
    })
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
  #[serde(default, deserialize_with = "lenient")]
  pub schemas: Option<IndexMap<String, Schema>>,
}

/// HTTP methods recognised as operation keys inside a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

/// Operations of one path, keyed by the method name exactly as written in the
/// document. Path-level keys that are not HTTP methods (`parameters`,
/// `summary`, `servers`, ...) are dropped.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
  pub operations: IndexMap<String, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
      return Ok(Self::default());
    };

    let operations = entries
      .into_iter()
      .filter(|(method, _)| method.parse::<HttpMethod>().is_ok())
      .filter_map(|(method, value)| Operation::deserialize(value).ok().map(|op| (method, op)))
      .collect();

    Ok(Self { operations })
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default, deserialize_with = "lenient")]
  pub summary: Option<String>,
  #[serde(default, deserialize_with = "lenient_vec")]
  pub parameters: Vec<Parameter>,
  #[serde(default, deserialize_with = "lenient")]
  pub request_body: Option<RequestBody>,
  #[serde(default, deserialize_with = "lenient_map")]
  pub responses: IndexMap<String, Response>,
}

impl Operation {
  #[must_use]
  pub fn json_request_schema(&self) -> Option<&Schema> {
    self.request_body.as_ref().and_then(|body| json_schema(&body.content))
  }

  /// Non-empty summary text, if any.
  #[must_use]
  pub fn summary(&self) -> Option<&str> {
    self.summary.as_deref().filter(|summary| !summary.is_empty())
  }

  pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
    self.parameters.iter().filter(move |param| param.location == location)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Query,
  Path,
  #[default]
  #[serde(other)]
  Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
  #[serde(default, deserialize_with = "lenient")]
  pub name: String,
  #[serde(rename = "in", default, deserialize_with = "lenient")]
  pub location: ParameterLocation,
  #[serde(default, deserialize_with = "lenient")]
  pub required: bool,
  #[serde(default)]
  pub schema: Option<Schema>,
  #[serde(default, deserialize_with = "lenient")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
  #[serde(default, deserialize_with = "lenient_map")]
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
  #[serde(default, deserialize_with = "lenient_map")]
  pub content: IndexMap<String, MediaType>,
}

impl Response {
  #[must_use]
  pub fn json_schema(&self) -> Option<&Schema> {
    json_schema(&self.content)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
  #[serde(default)]
  pub schema: Option<Schema>,
}

fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&Schema> {
  content.get(JSON_MEDIA_TYPE).and_then(|media| media.schema.as_ref())
}

/// Primitive `type` keywords that map directly to a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
  String,
  Integer,
  Number,
  Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CompositeOp {
  #[strum(serialize = "allOf")]
  AllOf,
  #[strum(serialize = "oneOf")]
  OneOf,
  #[strum(serialize = "anyOf")]
  AnyOf,
}

#[derive(Debug, Clone, Copy)]
pub struct Composite<'a> {
  pub op: CompositeOp,
  pub members: &'a [Schema],
}

/// Shape of a schema node as seen by type mapping.
///
/// Classification follows a fixed precedence: a reference wins over
/// everything, then arrays with items, then enum variant names, then the
/// `type` keyword. Anything left is [`SchemaKind::Unstructured`].
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
  Reference(&'a str),
  Array(&'a Schema),
  Enum(&'a [String]),
  Primitive(PrimitiveType),
  Object(Option<&'a IndexMap<String, Schema>>),
  Unstructured,
}

/// One schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
  pub ref_path: Option<String>,
  pub schema_type: Option<String>,
  pub items: Option<Box<Schema>>,
  pub enum_varnames: Option<Vec<String>>,
  pub enum_comments: IndexMap<String, String>,
  pub properties: Option<IndexMap<String, Schema>>,
  pub required: IndexSet<String>,
  pub all_of: Option<Vec<Schema>>,
  pub one_of: Option<Vec<Schema>>,
  pub any_of: Option<Vec<Schema>>,
  pub description: Option<String>,
}

impl<'de> Deserialize<'de> for Schema {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(Self::from_value(&value))
  }
}

impl Schema {
  /// Reads a schema node out of raw JSON. Non-object values yield an
  /// unstructured schema.
  #[must_use]
  pub fn from_value(value: &Value) -> Self {
    let Value::Object(map) = value else {
      return Self::default();
    };

    Self {
      ref_path: non_empty_string(map.get("$ref")),
      schema_type: non_empty_string(map.get("type")),
      items: map
        .get("items")
        .filter(|items| is_truthy(items))
        .map(|items| Box::new(Self::from_value(items))),
      enum_varnames: string_list(map.get(ENUM_VARNAMES_KEY)).filter(|names| !names.is_empty()),
      enum_comments: string_map(map.get(ENUM_COMMENTS_KEY)),
      properties: map.get("properties").and_then(Value::as_object).map(schema_map),
      required: string_list(map.get("required")).unwrap_or_default().into_iter().collect(),
      all_of: schema_list(map, "allOf"),
      one_of: schema_list(map, "oneOf"),
      any_of: schema_list(map, "anyOf"),
      description: non_empty_string(map.get("description")),
    }
  }

  #[must_use]
  pub fn kind(&self) -> SchemaKind<'_> {
    if let Some(ref_path) = &self.ref_path {
      return SchemaKind::Reference(ref_path);
    }

    let schema_type = self.schema_type.as_deref();
    if schema_type == Some("array")
      && let Some(items) = &self.items
    {
      return SchemaKind::Array(items);
    }

    if let Some(varnames) = &self.enum_varnames {
      return SchemaKind::Enum(varnames);
    }

    match schema_type {
      Some("object") => SchemaKind::Object(self.properties.as_ref()),
      Some(other) => other
        .parse::<PrimitiveType>()
        .map_or(SchemaKind::Unstructured, SchemaKind::Primitive),
      None => SchemaKind::Unstructured,
    }
  }

  /// The combinator of a composite schema. `allOf` takes precedence, then
  /// `oneOf`, then `anyOf`.
  #[must_use]
  pub fn composite(&self) -> Option<Composite<'_>> {
    [
      (CompositeOp::AllOf, &self.all_of),
      (CompositeOp::OneOf, &self.one_of),
      (CompositeOp::AnyOf, &self.any_of),
    ]
    .into_iter()
    .find_map(|(op, members)| members.as_deref().map(|members| Composite { op, members }))
  }

  #[must_use]
  pub fn is_enum(&self) -> bool {
    self.enum_varnames.is_some()
  }

  /// True for schemas that produce an interface or alias declaration.
  #[must_use]
  pub fn is_structured(&self) -> bool {
    self.properties.is_some() || self.composite().is_some()
  }

  #[must_use]
  pub fn is_required(&self, property: &str) -> bool {
    self.required.contains(property)
  }

  #[must_use]
  pub fn enum_comment(&self, variant: &str) -> Option<&str> {
    self
      .enum_comments
      .get(variant)
      .map(String::as_str)
      .filter(|comment| !comment.is_empty())
  }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
  value
    .and_then(Value::as_str)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
}

/// `false`, `null`, `0` and `""` count as absent; anything else is present.
fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(flag) => *flag,
    Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
    Value::String(text) => !text.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

/// Scalar entries rendered as text: strings as written, numbers, booleans
/// and `null` by their JSON spelling. Nested arrays and objects are dropped.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
  let items = value?.as_array()?;
  Some(
    items
      .iter()
      .filter_map(|item| match item {
        Value::String(text) => Some(text.clone()),
        Value::Number(_) | Value::Bool(_) | Value::Null => Some(item.to_string()),
        Value::Array(_) | Value::Object(_) => None,
      })
      .collect(),
  )
}

fn string_map(value: Option<&Value>) -> IndexMap<String, String> {
  value
    .and_then(Value::as_object)
    .map(|entries| {
      entries
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|text| (key.clone(), text.to_string())))
        .collect()
    })
    .unwrap_or_default()
}

fn schema_map(entries: &Map<String, Value>) -> IndexMap<String, Schema> {
  entries
    .iter()
    .map(|(name, value)| (name.clone(), Schema::from_value(value)))
    .collect()
}

fn schema_list(map: &Map<String, Value>, key: &str) -> Option<Vec<Schema>> {
  map
    .get(key)
    .and_then(Value::as_array)
    .map(|members| members.iter().map(Schema::from_value).collect())
}
