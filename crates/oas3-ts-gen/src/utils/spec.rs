use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::spec::SchemaDocument;

/// Memory-maps an OpenAPI JSON document and decodes it.
pub struct SpecLoader {
  file: AsyncMmapFile,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to read '{}'", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<SchemaDocument> {
    let bytes = self.file.as_slice();
    if bytes.is_empty() {
      anyhow::bail!("Input document is empty");
    }
    SchemaDocument::from_slice(bytes).context("Failed to parse OpenAPI JSON document")
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
  }

  #[tokio::test]
  async fn test_open_and_parse_document() {
    let file = write_temp(r#"{"components":{"schemas":{"Pet":{"type":"object","properties":{}}}}}"#);
    let document = SpecLoader::open(file.path()).await.unwrap().parse().unwrap();
    let schemas = document.schemas().unwrap();
    assert!(schemas.contains_key("Pet"));
  }

  #[tokio::test]
  async fn test_parse_rejects_invalid_json() {
    let file = write_temp("{ not json");
    let result = SpecLoader::open(file.path()).await.unwrap().parse();
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to parse OpenAPI JSON document"));
  }

  #[tokio::test]
  async fn test_open_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = SpecLoader::open(&dir.path().join("missing.json")).await;
    assert!(result.is_err());
  }
}
