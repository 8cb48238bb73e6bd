pub mod identifiers;
pub mod name_registry;

#[cfg(test)]
mod tests;

pub use identifiers::{clean_name, operation_base_name, path_to_type_name, ref_name, to_upper_camel_case};
pub use name_registry::NameRegistry;
