//! Declarations produced by the converters, before any TypeScript text exists.
//!
//! Converters decide names, optionality and member order; the `codegen`
//! module alone decides how those decisions are spelled.

mod documentation;


pub use documentation::Documentation;

use crate::generator::spec::PrimitiveType;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
  /// A named type, already prefixed and normalized.
  Named(String),
  Array(Box<TypeExpr>),
  /// Union of quoted string literals, in source order.
  StringLiterals(Vec<String>),
  Primitive(PrimitiveType),
  /// Anonymous structural type.
  InlineObject(Vec<Field>),
  /// Open string-keyed map with dynamic values.
  Record,
  Any,
  Intersection(Vec<TypeExpr>),
  Union(Vec<TypeExpr>),
}

impl TypeExpr {
  /// True when the expression spells as several `|` or `&` separated parts
  /// and must be parenthesized before a postfix or tighter operator.
  #[must_use]
  pub fn is_compound(&self) -> bool {
    match self {
      Self::StringLiterals(values) => values.len() > 1,
      Self::Union(members) | Self::Intersection(members) => members.len() > 1,
      _ => false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct Field {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub optional: bool,
  pub ty: TypeExpr,
  #[builder(default)]
  pub docs: Documentation,
}

/// One arm of a string-literal union declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumArm {
  pub value: String,
  pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
  Enum(Vec<EnumArm>),
  Interface(Vec<Field>),
  Alias(TypeExpr),
}

/// How the leading doc comment of a declaration is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocStyle {
  /// `/** text */`, continuation lines prefixed with ` * `.
  #[default]
  Inline,
  /// Closing `*/` on its own line.
  Block,
}

/// Category a declaration is counted under in generation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationOrigin {
  Schema,
  Request,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct Declaration {
  #[builder(into)]
  pub name: String,
  pub kind: DeclarationKind,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub doc_style: DocStyle,
  /// `METHOD path - summary` entries of operations referencing this type.
  #[builder(default)]
  pub usage: Vec<String>,
  #[builder(default = DeclarationOrigin::Schema)]
  pub origin: DeclarationOrigin,
}

impl Declaration {
  #[must_use]
  pub fn with_usage(mut self, usage: Vec<String>) -> Self {
    self.usage = usage;
    self
  }

  #[must_use]
  pub fn is_enum(&self) -> bool {
    matches!(self.kind, DeclarationKind::Enum(_))
  }

  #[must_use]
  pub fn is_interface(&self) -> bool {
    matches!(self.kind, DeclarationKind::Interface(_))
  }
}
