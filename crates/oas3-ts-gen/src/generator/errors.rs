use thiserror::Error;

/// Document-level failures. These abort the whole run; problems confined to
/// a single schema entry degrade instead and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
  #[error("Invalid schema: Missing components.schemas")]
  MissingSchemas,
}
