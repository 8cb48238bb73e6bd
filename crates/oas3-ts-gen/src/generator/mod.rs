pub mod ast;
pub mod codegen;
pub mod converter;
pub mod errors;
pub mod naming;
pub mod orchestrator;
pub mod spec;

#[cfg(test)]
mod tests;
