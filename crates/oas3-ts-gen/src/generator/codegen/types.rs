use itertools::Itertools;

use super::Emit;
use crate::generator::{
  ast::{Field, TypeExpr},
  spec::PrimitiveType,
};

impl Emit for PrimitiveType {
  fn emit(&self) -> String {
    match self {
      Self::String => "string",
      Self::Integer | Self::Number => "number",
      Self::Boolean => "boolean",
    }
    .to_string()
  }
}

impl Emit for TypeExpr {
  fn emit(&self) -> String {
    match self {
      Self::Named(name) => name.clone(),
      Self::Array(inner) => {
        if inner.is_compound() {
          format!("({})[]", inner.emit())
        } else {
          format!("{}[]", inner.emit())
        }
      }
      Self::StringLiterals(values) => values.iter().map(|value| format!("'{value}'")).join(" | "),
      Self::Primitive(primitive) => primitive.emit(),
      Self::InlineObject(fields) => {
        let members = fields.iter().map(inline_member).join(";\n  ");
        format!("{{\n  {members}\n}}")
      }
      Self::Record => "Record<string, any>".to_string(),
      Self::Any => "any".to_string(),
      Self::Intersection(members) => members
        .iter()
        .map(|member| {
          if member.is_compound() {
            format!("({})", member.emit())
          } else {
            member.emit()
          }
        })
        .join(" & "),
      Self::Union(members) => members.iter().map(Emit::emit).join(" | "),
    }
  }
}

fn inline_member(field: &Field) -> String {
  format!("{}: {}", member_key(field), field.ty.emit())
}

/// `name` or `name?`.
pub(super) fn member_key(field: &Field) -> String {
  if field.optional {
    format!("{}?", field.name)
  } else {
    field.name.clone()
  }
}
