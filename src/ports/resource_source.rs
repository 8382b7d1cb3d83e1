//! Resource Source Port - Interface for loading and persisting the resource catalog.

use async_trait::async_trait;

use crate::domain::catalog::ResourceCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors that can occur while reading or writing the catalog.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Resource catalog not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Malformed resource catalog: {0}")]
    Malformed(String),

    #[error("Invalid resource catalog: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to serialize catalog: {0}")]
    SerializationFailed(String),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Invalid(validation) => validation.into(),
            other => DomainError::new(ErrorCode::SourceUnavailable, other.to_string()),
        }
    }
}

/// A parsed, validated catalog and the fingerprint of the raw document it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: ResourceCatalog,
    /// Hex SHA-256 of the stored document.
    pub fingerprint: String,
}

/// Port for the external resource store.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Read, parse and validate the catalog.
    ///
    /// # Errors
    /// - `NotFound` if nothing is stored yet
    /// - `Malformed` if the document cannot be parsed
    /// - `Invalid` if it parses but fails validation
    async fn load(&self) -> Result<LoadedCatalog, SourceError>;

    /// Replace the stored catalog.
    ///
    /// # Returns
    /// The fingerprint of the document as written.
    async fn save(&self, catalog: &ResourceCatalog) -> Result<String, SourceError>;

    /// Fingerprint of the stored document without parsing it.
    ///
    /// Used for cheap change detection.
    async fn fingerprint(&self) -> Result<String, SourceError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}
