//! Orchestration for the OpenAPI to TypeScript generation pipeline.
//!
//! ## Usage
//!
//! ```no_run
//! use oas3_ts_gen::generator::{orchestrator::Orchestrator, spec::SchemaDocument};
//!
//! # fn example() -> anyhow::Result<()> {
//! let bytes = std::fs::read("openapi.json")?;
//! let document = SchemaDocument::from_slice(&bytes)?;
//!
//! let output = Orchestrator::new(&document, "Api").generate()?;
//! println!("Generated {} declarations", output.stats.declarations_generated());
//! std::fs::write("types.ts", output.code)?;
//! # Ok(())
//! # }
//! ```

use itertools::Itertools;

use crate::generator::{
  ast::{Declaration, DeclarationOrigin},
  codegen::{BLOCK_SEPARATOR, Emit},
  converter::{find_endpoints_for_schema, generate_enum, generate_request_types, generate_type},
  errors::GenerateError,
  naming::NameRegistry,
  spec::SchemaDocument,
};

/// Runs the generation pipeline over one document.
///
/// Every call to [`Orchestrator::generate`] starts from a fresh
/// [`NameRegistry`], so repeated or concurrent runs never see each other's
/// names.
pub struct Orchestrator<'a> {
  document: &'a SchemaDocument,
  prefix: &'a str,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// String-literal unions generated from enum schemas
  pub enums_generated: usize,
  /// Interfaces generated from object schemas
  pub interfaces_generated: usize,
  /// Aliases generated from `allOf`/`oneOf`/`anyOf` schemas
  pub type_aliases_generated: usize,
  /// Query, path and body declarations derived from operations
  pub request_types_generated: usize,
  /// Operations found under `paths`
  pub operations_scanned: usize,
  /// Schema entries that were neither enums nor structured and produced nothing
  pub schemas_skipped: usize,
}

impl GenerationStats {
  #[must_use]
  pub fn declarations_generated(&self) -> usize {
    self.enums_generated + self.interfaces_generated + self.type_aliases_generated + self.request_types_generated
  }

  fn record(&mut self, declaration: &Declaration) {
    if declaration.origin == DeclarationOrigin::Request {
      self.request_types_generated += 1;
    } else if declaration.is_enum() {
      self.enums_generated += 1;
    } else if declaration.is_interface() {
      self.interfaces_generated += 1;
    } else {
      self.type_aliases_generated += 1;
    }
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

impl<'a> Orchestrator<'a> {
  #[must_use]
  pub const fn new(document: &'a SchemaDocument, prefix: &'a str) -> Self {
    Self { document, prefix }
  }

  /// Builds every declaration in output order:
  /// 1. enum schemas, each preceded by its endpoint usage
  /// 2. object and composite schemas, each preceded by its endpoint usage
  /// 3. request types for every operation
  ///
  /// Enums always come first, whatever their position in the document.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::MissingSchemas`] if the document has no
  /// `components.schemas`.
  pub fn declarations(&self) -> Result<Vec<Declaration>, GenerateError> {
    let schemas = self.document.schemas().ok_or(GenerateError::MissingSchemas)?;
    let paths = &self.document.paths;

    let enums = schemas
      .iter()
      .filter(|(_, schema)| schema.is_enum())
      .filter_map(|(name, schema)| {
        generate_enum(name, schema).map(|decl| decl.with_usage(find_endpoints_for_schema(paths, name)))
      });

    let types = schemas
      .iter()
      .filter(|(_, schema)| schema.is_structured())
      .filter_map(|(name, schema)| {
        generate_type(name, schema, self.prefix).map(|decl| decl.with_usage(find_endpoints_for_schema(paths, name)))
      });

    let mut declarations: Vec<Declaration> = enums.chain(types).collect();

    let mut registry = NameRegistry::new();
    declarations.extend(generate_request_types(self.document, self.prefix, &mut registry));

    Ok(declarations)
  }

  /// Generates the TypeScript source for the document.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::MissingSchemas`] if the document has no
  /// `components.schemas`.
  pub fn generate(&self) -> Result<GeneratedOutput, GenerateError> {
    let declarations = self.declarations()?;

    let mut stats = GenerationStats {
      operations_scanned: self.document.operations().count(),
      schemas_skipped: self
        .document
        .schemas()
        .map_or(0, |schemas| schemas.values().filter(|s| !s.is_enum() && !s.is_structured()).count()),
      ..Default::default()
    };
    for declaration in &declarations {
      stats.record(declaration);
    }

    let code = declarations.iter().map(Emit::emit).join(BLOCK_SEPARATOR);
    Ok(GeneratedOutput { code, stats })
  }
}

/// Generates TypeScript declarations for `document`, prefixing every
/// referenced type name with `prefix`.
///
/// # Errors
///
/// Returns [`GenerateError::MissingSchemas`] if the document has no
/// `components.schemas`.
pub fn generate_types(document: &SchemaDocument, prefix: &str) -> Result<String, GenerateError> {
  Orchestrator::new(document, prefix).generate().map(|output| output.code)
}
