use crate::core::{ContentModelMetadata, MetadataSource};
use crate::utils::error::{GenError, Result};
use std::path::PathBuf;

/// Reads the content model metadata from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileMetadata {
    path: PathBuf,
}

impl JsonFileMetadata {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataSource for JsonFileMetadata {
    fn load(&self) -> Result<ContentModelMetadata> {
        if !self.path.is_file() {
            return Err(GenError::MetadataUnavailable {
                message: format!("{} does not exist", self.path.display()),
            });
        }

        tracing::debug!("Reading content model metadata from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        let metadata: ContentModelMetadata = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} item type(s)", metadata.item_types.len());

        Ok(metadata)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadata {
    document: Option<ContentModelMetadata>,
}

impl InMemoryMetadata {
    pub fn new(document: ContentModelMetadata) -> Self {
        Self {
            document: Some(document),
        }
    }

    pub fn unavailable() -> Self {
        Self { document: None }
    }
}

impl MetadataSource for InMemoryMetadata {
    fn load(&self) -> Result<ContentModelMetadata> {
        self.document
            .clone()
            .ok_or_else(|| GenError::MetadataUnavailable {
                message: "no in-memory document".to_string(),
            })
    }
}
