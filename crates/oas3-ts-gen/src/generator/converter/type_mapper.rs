use indexmap::IndexMap;

use crate::generator::{
  ast::{Documentation, Field, TypeExpr},
  codegen::Emit,
  naming::{clean_name, ref_name},
  spec::{Schema, SchemaKind},
};

/// Maps schema nodes to TypeScript type expressions.
///
/// Mapping is total: a node that matches no known shape becomes `any`
/// rather than an error, so one malformed fragment cannot abort a run.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
  prefix: &'a str,
}

impl<'a> TypeMapper<'a> {
  #[must_use]
  pub const fn new(prefix: &'a str) -> Self {
    Self { prefix }
  }

  /// Named type for a `$ref`, resolved by its trailing segment only.
  #[must_use]
  pub fn reference(&self, ref_path: &str) -> TypeExpr {
    TypeExpr::Named(format!("{}{}", self.prefix, clean_name(ref_name(ref_path))))
  }

  #[must_use]
  pub fn map(&self, schema: &Schema) -> TypeExpr {
    match schema.kind() {
      SchemaKind::Reference(ref_path) => self.reference(ref_path),
      SchemaKind::Array(items) => TypeExpr::Array(Box::new(self.map(items))),
      SchemaKind::Enum(values) => TypeExpr::StringLiterals(values.to_vec()),
      SchemaKind::Primitive(primitive) => TypeExpr::Primitive(primitive),
      SchemaKind::Object(Some(properties)) => TypeExpr::InlineObject(self.inline_fields(schema, properties)),
      SchemaKind::Object(None) => TypeExpr::Record,
      SchemaKind::Unstructured => TypeExpr::Any,
    }
  }

  /// Members of an anonymous object. A member is optional when its name is
  /// missing from `owner.required`, where `owner` is the object whose
  /// `properties` are being listed, at every depth. Descriptions are not
  /// carried into inline members.
  fn inline_fields(&self, owner: &Schema, properties: &IndexMap<String, Schema>) -> Vec<Field> {
    properties
      .iter()
      .map(|(name, property)| {
        Field::builder()
          .name(name)
          .optional(!owner.is_required(name))
          .ty(self.map(property))
          .build()
      })
      .collect()
  }

  /// Members of a named interface, with each property's description kept as
  /// its doc comment.
  #[must_use]
  pub fn documented_fields(&self, owner: &Schema, properties: &IndexMap<String, Schema>) -> Vec<Field> {
    properties
      .iter()
      .map(|(name, property)| {
        Field::builder()
          .name(name)
          .optional(!owner.is_required(name))
          .ty(self.map(property))
          .docs(Documentation::from_optional(property.description.as_deref()))
          .build()
      })
      .collect()
  }
}

/// Renders the TypeScript type of `schema`, prefixing referenced type names
/// with `prefix`.
#[must_use]
pub fn map_type(schema: &Schema, prefix: &str) -> String {
  TypeMapper::new(prefix).map(schema).emit()
}
