//! File-based Resource Source Adapter
//!
//! Reads the catalog from a single JSON or YAML file. Writes go to a sibling
//! temporary file first and are renamed into place, so a concurrent reader
//! never sees a half-written document.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{content_fingerprint, CatalogFormat};
use crate::domain::catalog::ResourceCatalog;
use crate::ports::{LoadedCatalog, ResourceSource, SourceError};

/// File-backed resource catalog
#[derive(Debug, Clone)]
pub struct FileResourceSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileResourceSource {
    /// Create a source for `path`, picking the format from its extension
    ///
    /// # Example
    /// ```ignore
    /// let source = FileResourceSource::new("./config/resources.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = CatalogFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(self.path.display().to_string()),
            _ => SourceError::IoError(format!("{}: {}", self.path.display(), e)),
        })
    }
}

#[async_trait]
impl ResourceSource for FileResourceSource {
    async fn load(&self) -> Result<LoadedCatalog, SourceError> {
        let content = self.read().await?;
        let catalog = self.format.parse(&content)?;

        Ok(LoadedCatalog {
            catalog,
            fingerprint: content_fingerprint(&content),
        })
    }

    async fn save(&self, catalog: &ResourceCatalog) -> Result<String, SourceError> {
        let content = self.format.render(catalog)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SourceError::IoError(e.to_string()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, &content)
            .await
            .map_err(|e| SourceError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| SourceError::IoError(e.to_string()))?;

        Ok(content_fingerprint(&content))
    }

    async fn fingerprint(&self) -> Result<String, SourceError> {
        let content = self.read().await?;
        Ok(content_fingerprint(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Resource;
    use tempfile::TempDir;

    fn create_test_source(file_name: &str) -> (FileResourceSource, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let source = FileResourceSource::new(temp_dir.path().join(file_name));
        (source, temp_dir)
    }

    #[tokio::test]
    async fn test_load_missing_file_is_not_found() {
        let (source, _temp) = create_test_source("resources.json");

        let result = source.load().await;

        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_and_load_json() {
        let (source, _temp) = create_test_source("resources.json");
        let catalog = ResourceCatalog::sample();

        let written = source.save(&catalog).await.unwrap();
        let loaded = source.load().await.unwrap();

        assert_eq!(loaded.catalog, catalog);
        assert_eq!(loaded.fingerprint, written);
        assert!(!source.temp_path().exists());
    }

    #[tokio::test]
    async fn test_save_and_load_yaml() {
        let (source, _temp) = create_test_source("resources.yaml");
        assert_eq!(source.format(), CatalogFormat::Yaml);

        let catalog = ResourceCatalog::new(vec![Resource::new("a", "ai", "free", "tools")]);
        source.save(&catalog).await.unwrap();

        let raw = std::fs::read_to_string(source.path()).unwrap();
        assert!(raw.contains("id: a"));
        assert_eq!(source.load().await.unwrap().catalog, catalog);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileResourceSource::new(temp_dir.path().join("config/nested/resources.json"));

        source.save(&ResourceCatalog::sample()).await.unwrap();

        assert!(source.path().exists());
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let (source, _temp) = create_test_source("resources.json");
        std::fs::write(source.path(), "{ \"resources\": [").unwrap();

        let result = source.load().await;

        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_fingerprint_tracks_file_changes() {
        let (source, _temp) = create_test_source("resources.json");
        source.save(&ResourceCatalog::sample()).await.unwrap();
        let before = source.fingerprint().await.unwrap();

        source
            .save(&ResourceCatalog::new(vec![Resource::new("b", "ai", "paid", "course")]))
            .await
            .unwrap();
        let after = source.fingerprint().await.unwrap();

        assert_ne!(before, after);
    }
}
