//! TypeScript text emission.
//!
//! Every byte of TypeScript syntax the generator writes comes from this
//! module. Converters hand over [`Declaration`] values and never format text.
//!
//! [`Declaration`]: crate::generator::ast::Declaration

mod comments;
mod declarations;
mod types;

#[cfg(test)]
mod tests;

pub use comments::generate_endpoint_comment;

/// Separator placed between emitted declaration blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Converts an AST node into TypeScript source text.
pub trait Emit {
  fn emit(&self) -> String;
}
