use serde_json::json;

use super::support::schema;
use crate::generator::{
  ast::{DeclarationKind, EnumArm},
  codegen::Emit,
  converter::generate_enum,
};

#[test]
fn test_generate_enum_arms_in_order_with_comments() {
  let role = schema(json!({
    "type": "string",
    "enum": ["ADMIN", "USER", "GUEST"],
    "x-enum-varnames": ["ADMIN", "USER", "GUEST"],
    "x-enum-comments": { "ADMIN": "Administrator with full access" }
  }));

  let decl = generate_enum("userRole", &role).expect("enum declaration");
  assert_eq!(decl.name, "UserRole");

  let DeclarationKind::Enum(arms) = &decl.kind else {
    panic!("expected enum declaration");
  };
  assert_eq!(
    arms,
    &vec![
      EnumArm {
        value: "ADMIN".to_string(),
        comment: Some("Administrator with full access".to_string()),
      },
      EnumArm {
        value: "USER".to_string(),
        comment: None,
      },
      EnumArm {
        value: "GUEST".to_string(),
        comment: None,
      },
    ]
  );

  assert_eq!(
    decl.emit(),
    "export type UserRole = /** Administrator with full access */\n  | 'ADMIN'\n  | 'USER'\n  | 'GUEST';"
  );
}

#[test]
fn test_generate_enum_comments_keyed_by_raw_variant_name() {
  let status = schema(json!({
    "x-enum-varnames": ["active", "inactive"],
    "x-enum-comments": { "inactive": "No longer in use", "unknown": "Ignored" }
  }));

  let decl = generate_enum("common.Status", &status).expect("enum declaration");
  assert_eq!(
    decl.emit(),
    "export type Status =\n  | 'active' /** No longer in use */\n  | 'inactive';"
  );
}

#[test]
fn test_generate_enum_skips_schemas_without_varnames() {
  assert!(generate_enum("Plain", &schema(json!({ "type": "string", "enum": ["a", "b"] }))).is_none());
  assert!(generate_enum("Empty", &schema(json!({ "x-enum-varnames": [] }))).is_none());
  assert!(generate_enum("Wrong", &schema(json!({ "x-enum-varnames": "A" }))).is_none());
}
