use crate::generator::{
  ast::{Field, TypeExpr},
  codegen::Emit,
  spec::PrimitiveType,
};

fn named(name: &str) -> TypeExpr {
  TypeExpr::Named(name.to_string())
}

fn literals(values: &[&str]) -> TypeExpr {
  TypeExpr::StringLiterals(values.iter().map(ToString::to_string).collect())
}

#[test]
fn test_primitives() {
  let cases = [
    (PrimitiveType::String, "string"),
    (PrimitiveType::Integer, "number"),
    (PrimitiveType::Number, "number"),
    (PrimitiveType::Boolean, "boolean"),
  ];
  for (primitive, expected) in cases {
    assert_eq!(TypeExpr::Primitive(primitive).emit(), expected, "primitive {primitive}");
  }
  assert_eq!(TypeExpr::Any.emit(), "any");
  assert_eq!(TypeExpr::Record.emit(), "Record<string, any>");
}

#[test]
fn test_array_wraps_compound_items() {
  assert_eq!(TypeExpr::Array(Box::new(named("User"))).emit(), "User[]");
  assert_eq!(TypeExpr::Array(Box::new(literals(&["A"]))).emit(), "'A'[]");
  assert_eq!(TypeExpr::Array(Box::new(literals(&["A", "B"]))).emit(), "('A' | 'B')[]");
  assert_eq!(
    TypeExpr::Array(Box::new(TypeExpr::Array(Box::new(TypeExpr::Any)))).emit(),
    "any[][]"
  );
}

#[test]
fn test_intersection_wraps_unions() {
  let expr = TypeExpr::Intersection(vec![
    named("Base"),
    TypeExpr::Union(vec![named("Cat"), named("Dog")]),
  ]);
  assert_eq!(expr.emit(), "Base & (Cat | Dog)");

  let union = TypeExpr::Union(vec![named("A"), TypeExpr::Intersection(vec![named("B"), named("C")])]);
  assert_eq!(union.emit(), "A | B & C");
}

#[test]
fn test_inline_object_members() {
  let expr = TypeExpr::InlineObject(vec![
    Field::builder().name("a").optional(true).ty(TypeExpr::Any).build(),
    Field::builder().name("b").ty(named("B")).build(),
  ]);
  assert_eq!(expr.emit(), "{\n  a?: any;\n  b: B\n}");
}
