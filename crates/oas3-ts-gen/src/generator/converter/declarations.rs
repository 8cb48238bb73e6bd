use crate::generator::{
  ast::{Declaration, DeclarationKind, Documentation, TypeExpr},
  converter::TypeMapper,
  naming::clean_name,
  spec::{CompositeOp, Schema},
};

/// Builds the declaration for an object or composite schema.
///
/// In priority order:
/// 1. `allOf` becomes an intersection alias.
/// 2. `oneOf` or `anyOf` becomes a union alias. The two are not told apart.
/// 3. `properties` becomes an interface.
///
/// Anything else yields `None` and is skipped by the caller. The schema's
/// `description` becomes the declaration's doc comment.
#[must_use]
pub fn generate_type(name: &str, definition: &Schema, prefix: &str) -> Option<Declaration> {
  let mapper = TypeMapper::new(prefix);

  let kind = if let Some(composite) = definition.composite() {
    let members = composite.members.iter().map(|member| mapper.map(member)).collect();
    DeclarationKind::Alias(match composite.op {
      CompositeOp::AllOf => TypeExpr::Intersection(members),
      CompositeOp::OneOf | CompositeOp::AnyOf => TypeExpr::Union(members),
    })
  } else if let Some(properties) = &definition.properties {
    DeclarationKind::Interface(mapper.documented_fields(definition, properties))
  } else {
    return None;
  };

  Some(
    Declaration::builder()
      .name(clean_name(name))
      .kind(kind)
      .docs(Documentation::from_optional(definition.description.as_deref()))
      .build(),
  )
}
