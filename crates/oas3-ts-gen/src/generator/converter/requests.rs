use crate::generator::{
  ast::{Declaration, DeclarationKind, DeclarationOrigin, DocStyle, Documentation, Field, TypeExpr},
  converter::TypeMapper,
  naming::{NameRegistry, operation_base_name},
  spec::{Operation, Parameter, ParameterLocation, SchemaDocument},
};

pub const QUERY_PARAMS_SUFFIX: &str = "QueryParams";
pub const PATH_PARAMS_SUFFIX: &str = "PathParams";
pub const REQUEST_BODY_SUFFIX: &str = "RequestBody";

const QUERY_PARAMS_HEADING: &str = "Query Parameters";
const PATH_PARAMS_HEADING: &str = "Path Parameters";
const REQUEST_BODY_HEADING: &str = "Request Body";

/// Derives query, path and body declarations for every operation.
///
/// All names pass through one [`NameRegistry`], so two operations that
/// derive the same candidate name get distinct declarations.
pub struct RequestTypeGenerator<'a> {
  mapper: TypeMapper<'a>,
  registry: &'a mut NameRegistry,
}

struct OperationContext<'o> {
  method: &'o str,
  path: &'o str,
  base_name: String,
  operation: &'o Operation,
}

impl OperationContext<'_> {
  fn heading(&self, kind: &str) -> Documentation {
    let mut docs = Documentation::from_lines([format!("{} {}", self.method.to_uppercase(), self.path)]);
    if let Some(summary) = self.operation.summary() {
      docs.push(summary);
    }
    docs.push(kind);
    docs
  }
}

impl<'a> RequestTypeGenerator<'a> {
  pub fn new(prefix: &'a str, registry: &'a mut NameRegistry) -> Self {
    Self {
      mapper: TypeMapper::new(prefix),
      registry,
    }
  }

  pub fn generate(&mut self, document: &SchemaDocument) -> Vec<Declaration> {
    let mut declarations = vec![];
    for (path, method, operation) in document.operations() {
      let ctx = OperationContext {
        method,
        path,
        base_name: operation_base_name(method, path),
        operation,
      };
      declarations.extend(self.query_params(&ctx));
      declarations.extend(self.path_params(&ctx));
      declarations.extend(self.request_body(&ctx));
    }
    declarations
  }

  fn query_params(&mut self, ctx: &OperationContext<'_>) -> Option<Declaration> {
    let fields: Vec<Field> = ctx
      .operation
      .parameters_in(ParameterLocation::Query)
      .map(|param| self.param_field(param, !param.required))
      .collect();
    self.params_interface(ctx, fields, QUERY_PARAMS_SUFFIX, QUERY_PARAMS_HEADING)
  }

  /// Path parameters are always required, whatever the parameter declares.
  fn path_params(&mut self, ctx: &OperationContext<'_>) -> Option<Declaration> {
    let fields: Vec<Field> = ctx
      .operation
      .parameters_in(ParameterLocation::Path)
      .map(|param| self.param_field(param, false))
      .collect();
    self.params_interface(ctx, fields, PATH_PARAMS_SUFFIX, PATH_PARAMS_HEADING)
  }

  fn request_body(&mut self, ctx: &OperationContext<'_>) -> Option<Declaration> {
    let schema = ctx.operation.json_request_schema()?;
    let target = self.mapper.map(schema);
    let name = self.registry.claim(&format!("{}{REQUEST_BODY_SUFFIX}", ctx.base_name));

    Some(
      Declaration::builder()
        .name(name)
        .kind(DeclarationKind::Alias(target))
        .docs(ctx.heading(REQUEST_BODY_HEADING))
        .doc_style(DocStyle::Block)
        .origin(DeclarationOrigin::Request)
        .build(),
    )
  }

  fn params_interface(
    &mut self,
    ctx: &OperationContext<'_>,
    fields: Vec<Field>,
    suffix: &str,
    heading: &str,
  ) -> Option<Declaration> {
    if fields.is_empty() {
      return None;
    }

    let name = self.registry.claim(&format!("{}{suffix}", ctx.base_name));
    Some(
      Declaration::builder()
        .name(name)
        .kind(DeclarationKind::Interface(fields))
        .docs(ctx.heading(heading))
        .doc_style(DocStyle::Block)
        .origin(DeclarationOrigin::Request)
        .build(),
    )
  }

  fn param_field(&self, param: &Parameter, optional: bool) -> Field {
    let ty = param.schema.as_ref().map_or(TypeExpr::Any, |schema| self.mapper.map(schema));
    Field::builder()
      .name(param.name.as_str())
      .optional(optional)
      .ty(ty)
      .docs(Documentation::from_optional(param.description.as_deref()))
      .build()
  }
}

/// Request declarations for every operation in `document`, registering each
/// chosen name in `registry`.
pub fn generate_request_types(document: &SchemaDocument, prefix: &str, registry: &mut NameRegistry) -> Vec<Declaration> {
  RequestTypeGenerator::new(prefix, registry).generate(document)
}
