//! ReplaceCatalogHandler - Command handler for storing a new resource catalog.
//!
//! Validates the catalog, writes it through the resource source and
//! publishes a survey built from it, so readers never see a stored catalog
//! without its survey.

use std::sync::Arc;

use tracing::info;

use crate::application::SurveyRegistry;
use crate::domain::catalog::ResourceCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::survey::SurveyBuilder;
use crate::ports::{ResourceSource, SourceError};

use super::{RegenerationOutcome, RegenerationStats};

/// Command to replace the stored catalog.
#[derive(Debug, Clone)]
pub struct ReplaceCatalogCommand {
    pub catalog: ResourceCatalog,
}

/// Error type for catalog replacement.
#[derive(Debug)]
pub enum ReplaceCatalogError {
    /// The catalog failed validation; nothing was written.
    Invalid(ValidationError),
    /// The catalog could not be written.
    Persist(SourceError),
}

impl std::fmt::Display for ReplaceCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplaceCatalogError::Invalid(err) => write!(f, "Invalid catalog: {}", err),
            ReplaceCatalogError::Persist(err) => write!(f, "Failed to store catalog: {}", err),
        }
    }
}

impl std::error::Error for ReplaceCatalogError {}

impl From<ReplaceCatalogError> for DomainError {
    fn from(err: ReplaceCatalogError) -> Self {
        match err {
            ReplaceCatalogError::Invalid(validation) => validation.into(),
            ReplaceCatalogError::Persist(source) => {
                DomainError::new(ErrorCode::SourceUnavailable, source.to_string())
            }
        }
    }
}

/// Handler for replacing the resource catalog.
pub struct ReplaceCatalogHandler {
    source: Arc<dyn ResourceSource>,
    registry: Arc<SurveyRegistry>,
    builder: SurveyBuilder,
}

impl ReplaceCatalogHandler {
    pub fn new(
        source: Arc<dyn ResourceSource>,
        registry: Arc<SurveyRegistry>,
        builder: SurveyBuilder,
    ) -> Self {
        Self {
            source,
            registry,
            builder,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReplaceCatalogCommand,
    ) -> Result<RegenerationOutcome, ReplaceCatalogError> {
        cmd.catalog.validate().map_err(ReplaceCatalogError::Invalid)?;

        let survey = self.builder.build(&cmd.catalog);

        let _guard = self.registry.lock_regeneration().await;

        let fingerprint = self
            .source
            .save(&cmd.catalog)
            .await
            .map_err(ReplaceCatalogError::Persist)?;

        let resources = cmd.catalog.resources.len();
        let snapshot = self.registry.publish(survey, fingerprint, resources);

        info!(
            source = %self.source.describe(),
            resources,
            version = snapshot.version,
            "catalog replaced"
        );

        Ok(RegenerationOutcome::Published(RegenerationStats {
            snapshot_id: snapshot.id,
            version: snapshot.version,
            resources,
            questions: snapshot.survey.questions.len(),
            rules: snapshot.survey.rules.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResourceSource;
    use crate::application::handlers::{RegenerateSurveyCommand, RegenerateSurveyHandler};
    use crate::domain::catalog::Resource;

    fn setup() -> (
        ReplaceCatalogHandler,
        InMemoryResourceSource,
        Arc<SurveyRegistry>,
    ) {
        let source = InMemoryResourceSource::new(ResourceCatalog::sample()).unwrap();
        let registry = Arc::new(SurveyRegistry::new());
        let handler = ReplaceCatalogHandler::new(
            Arc::new(source.clone()),
            Arc::clone(&registry),
            SurveyBuilder::default(),
        );
        (handler, source, registry)
    }

    fn two_resources() -> ResourceCatalog {
        ResourceCatalog::new(vec![
            Resource::new("signals", "trading", "paid", "community"),
            Resource::new("starter", "learning", "free", "checklist"),
        ])
    }

    #[tokio::test]
    async fn stores_and_publishes() {
        let (handler, source, registry) = setup();

        let outcome = handler
            .handle(ReplaceCatalogCommand {
                catalog: two_resources(),
            })
            .await
            .unwrap();

        assert!(outcome.is_published());
        assert_eq!(outcome.stats().resources, 2);
        let stored = source.load().await.unwrap();
        assert_eq!(stored.catalog, two_resources());
        assert_eq!(
            registry.current_fingerprint().as_deref(),
            Some(stored.fingerprint.as_str())
        );
    }

    #[tokio::test]
    async fn invalid_catalog_is_rejected_before_writing() {
        let (handler, source, registry) = setup();
        let before = source.fingerprint().await.unwrap();

        let result = handler
            .handle(ReplaceCatalogCommand {
                catalog: ResourceCatalog::new(vec![
                    Resource::new("dup", "ai", "free", "tools"),
                    Resource::new("dup", "ai", "paid", "tools"),
                ]),
            })
            .await;

        assert!(matches!(result, Err(ReplaceCatalogError::Invalid(_))));
        assert_eq!(source.fingerprint().await.unwrap(), before);
        assert!(registry.current().is_none());
    }

    #[tokio::test]
    async fn later_unforced_regeneration_sees_no_change() {
        let (handler, source, registry) = setup();
        handler
            .handle(ReplaceCatalogCommand {
                catalog: two_resources(),
            })
            .await
            .unwrap();

        let regenerate = RegenerateSurveyHandler::new(
            Arc::new(source),
            Arc::clone(&registry),
            SurveyBuilder::default(),
        );
        let outcome = regenerate
            .handle(RegenerateSurveyCommand::if_changed())
            .await
            .unwrap();

        assert!(!outcome.is_published());
        assert_eq!(registry.current().unwrap().version, 1);
    }

    #[test]
    fn invalid_maps_to_validation_code() {
        let err: DomainError =
            ReplaceCatalogError::Invalid(ValidationError::empty_field("resources[0].id")).into();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
