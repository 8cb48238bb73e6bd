use crate::generator::{
  ast::{Declaration, DeclarationKind, EnumArm},
  naming::clean_name,
  spec::Schema,
};

/// Builds a string-literal union from `x-enum-varnames`, one arm per variant
/// in source order. Each arm carries the matching `x-enum-comments` entry,
/// keyed by the variant's raw name.
///
/// Returns `None` for schemas without variant names; callers skip those.
#[must_use]
pub fn generate_enum(name: &str, schema: &Schema) -> Option<Declaration> {
  let varnames = schema.enum_varnames.as_ref()?;

  let arms = varnames
    .iter()
    .map(|value| EnumArm {
      value: value.clone(),
      comment: schema.enum_comment(value).map(str::to_string),
    })
    .collect();

  Some(
    Declaration::builder()
      .name(clean_name(name))
      .kind(DeclarationKind::Enum(arms))
      .build(),
  )
}
