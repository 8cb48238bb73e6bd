#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Generates TypeScript declarations from OpenAPI JSON documents.
//!
//! The [`generator`] module is the engine: it turns a decoded
//! [`SchemaDocument`] into TypeScript source text. The [`ui`] and [`utils`]
//! modules hold the command-line front end that reads and writes files.

pub mod generator;
pub mod ui;
pub mod utils;

pub use generator::{
  errors::GenerateError,
  orchestrator::{GeneratedOutput, GenerationStats, Orchestrator, generate_types},
  spec::SchemaDocument,
};
