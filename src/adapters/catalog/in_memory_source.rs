//! In-Memory Resource Source Adapter
//!
//! Holds the catalog document as a JSON string in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{content_fingerprint, CatalogFormat};
use crate::domain::catalog::ResourceCatalog;
use crate::ports::{LoadedCatalog, ResourceSource, SourceError};

/// In-memory resource catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceSource {
    document: Arc<RwLock<Option<String>>>,
}

impl InMemoryResourceSource {
    /// Create a source holding `catalog`, rendered as JSON
    pub fn new(catalog: ResourceCatalog) -> Result<Self, SourceError> {
        let document = CatalogFormat::Json.render(&catalog)?;
        Ok(Self {
            document: Arc::new(RwLock::new(Some(document))),
        })
    }

    /// Create a source with nothing stored
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the stored document with raw text, bypassing validation
    /// (useful for tests exercising malformed input)
    pub async fn set_raw(&self, document: impl Into<String>) {
        *self.document.write().await = Some(document.into());
    }

    /// Drop the stored document
    pub async fn clear(&self) {
        *self.document.write().await = None;
    }

    async fn read(&self) -> Result<String, SourceError> {
        self.document
            .read()
            .await
            .clone()
            .ok_or_else(|| SourceError::NotFound("in-memory catalog".to_string()))
    }
}

#[async_trait]
impl ResourceSource for InMemoryResourceSource {
    async fn load(&self) -> Result<LoadedCatalog, SourceError> {
        let content = self.read().await?;
        let catalog = CatalogFormat::Json.parse(&content)?;

        Ok(LoadedCatalog {
            catalog,
            fingerprint: content_fingerprint(&content),
        })
    }

    async fn save(&self, catalog: &ResourceCatalog) -> Result<String, SourceError> {
        let content = CatalogFormat::Json.render(catalog)?;
        let fingerprint = content_fingerprint(&content);
        *self.document.write().await = Some(content);
        Ok(fingerprint)
    }

    async fn fingerprint(&self) -> Result<String, SourceError> {
        Ok(content_fingerprint(&self.read().await?))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
