use itertools::Itertools;

use super::{
  Emit,
  comments::{declaration_comment, generate_endpoint_comment, member_comment},
  types::member_key,
};
use crate::generator::ast::{Declaration, DeclarationKind, EnumArm, Field};

const INDENT: &str = "  ";

impl Emit for Declaration {
  fn emit(&self) -> String {
    let usage = generate_endpoint_comment(&self.usage);
    let docs = declaration_comment(&self.docs, self.doc_style);
    let body = match &self.kind {
      DeclarationKind::Enum(arms) => emit_enum(&self.name, arms),
      DeclarationKind::Interface(fields) => emit_interface(&self.name, fields),
      DeclarationKind::Alias(target) => format!("export type {} = {};", self.name, target.emit()),
    };
    format!("{usage}{docs}{body}")
  }
}

/// Each arm sits on its own `| 'VALUE'` line. An arm's comment is written
/// before the line break that precedes it.
fn emit_enum(name: &str, arms: &[EnumArm]) -> String {
  let arms: String = arms
    .iter()
    .map(|arm| {
      let comment = arm
        .comment
        .as_ref()
        .map(|comment| format!(" /** {comment} */"))
        .unwrap_or_default();
      format!("{comment}\n{INDENT}| '{}'", arm.value)
    })
    .collect();
  format!("export type {name} ={arms};")
}

fn emit_interface(name: &str, fields: &[Field]) -> String {
  let members = fields
    .iter()
    .map(|field| {
      format!(
        "{}{INDENT}{}: {};",
        member_comment(&field.docs, INDENT),
        member_key(field),
        field.ty.emit()
      )
    })
    .join("\n");
  format!("export interface {name} {{\n{members}\n}}")
}
