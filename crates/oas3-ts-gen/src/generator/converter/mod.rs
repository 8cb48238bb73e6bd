//! Schema and operation conversion into [`Declaration`] values.
//!
//! [`Declaration`]: crate::generator::ast::Declaration

mod declarations;
mod endpoints;
mod enums;
mod requests;
mod type_mapper;

#[cfg(test)]
mod tests;

pub use declarations::generate_type;
pub use endpoints::find_endpoints_for_schema;
pub use enums::generate_enum;
pub use requests::{
  PATH_PARAMS_SUFFIX, QUERY_PARAMS_SUFFIX, REQUEST_BODY_SUFFIX, RequestTypeGenerator, generate_request_types,
};
pub use type_mapper::{TypeMapper, map_type};
