use itertools::Itertools;

use crate::generator::ast::{DocStyle, Documentation};

const USAGE_HEADING: &str = "Used in:";

/// Renders the operations that reference a schema as a `Used in:` doc block.
/// An empty list renders as nothing.
#[must_use]
pub fn generate_endpoint_comment(endpoints: &[String]) -> String {
  if endpoints.is_empty() {
    return String::new();
  }

  let entries = endpoints.iter().map(|endpoint| format!(" * {endpoint}")).join("\n");
  format!("/**\n * {USAGE_HEADING}\n{entries}\n */\n")
}

/// Leading doc comment of a declaration, including the trailing newline.
pub(super) fn declaration_comment(docs: &Documentation, style: DocStyle) -> String {
  if docs.is_empty() {
    return String::new();
  }

  let body = docs.lines().join("\n * ");
  match style {
    DocStyle::Inline => format!("/** {body} */\n"),
    DocStyle::Block => format!("/** {body}\n */\n"),
  }
}

/// Doc comment of an interface member, indented to sit above the member.
pub(super) fn member_comment(docs: &Documentation, indent: &str) -> String {
  if docs.is_empty() {
    return String::new();
  }

  let body = docs.lines().join(&format!("\n{indent} * "));
  format!("{indent}/** {body} */\n")
}
