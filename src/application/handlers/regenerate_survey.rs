//! RegenerateSurveyHandler - Command handler for rebuilding the published survey.
//!
//! Loads the catalog from the resource source, builds a new survey and
//! publishes it. A failed load leaves the current snapshot in force.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::SurveyRegistry;
use crate::domain::foundation::{DomainError, SnapshotId};
use crate::domain::survey::SurveyBuilder;
use crate::ports::{ResourceSource, SourceError};

/// Command to regenerate the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegenerateSurveyCommand {
    /// Rebuild even if the catalog fingerprint is unchanged.
    pub force: bool,
}

impl RegenerateSurveyCommand {
    /// Rebuild unconditionally (startup, explicit admin action).
    pub fn forced() -> Self {
        Self { force: true }
    }

    /// Rebuild only if the catalog changed (file watching).
    pub fn if_changed() -> Self {
        Self { force: false }
    }
}

/// Counts describing a published snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationStats {
    pub snapshot_id: SnapshotId,
    pub version: u64,
    pub resources: usize,
    pub questions: usize,
    pub rules: usize,
}

/// Result of a regeneration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationOutcome {
    /// A new snapshot was published.
    Published(RegenerationStats),
    /// The catalog was unchanged; the current snapshot stays.
    Unchanged(RegenerationStats),
}

impl RegenerationOutcome {
    pub fn stats(&self) -> &RegenerationStats {
        match self {
            RegenerationOutcome::Published(stats) | RegenerationOutcome::Unchanged(stats) => stats,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, RegenerationOutcome::Published(_))
    }
}

/// Error type for survey regeneration.
#[derive(Debug)]
pub enum RegenerateSurveyError {
    /// The catalog could not be read, parsed or validated.
    Source(SourceError),
}

impl std::fmt::Display for RegenerateSurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegenerateSurveyError::Source(err) => {
                write!(f, "Failed to load resource catalog: {}", err)
            }
        }
    }
}

impl std::error::Error for RegenerateSurveyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegenerateSurveyError::Source(err) => Some(err),
        }
    }
}

impl From<SourceError> for RegenerateSurveyError {
    fn from(err: SourceError) -> Self {
        RegenerateSurveyError::Source(err)
    }
}

impl From<RegenerateSurveyError> for DomainError {
    fn from(err: RegenerateSurveyError) -> Self {
        match err {
            RegenerateSurveyError::Source(source) => source.into(),
        }
    }
}

/// Handler for regenerating the published survey.
///
/// # Dependencies
///
/// - `ResourceSource`: Read the catalog
/// - `SurveyRegistry`: Publish the rebuilt survey
///
/// # Regeneration Flow
///
/// 1. Load and validate the catalog
/// 2. Skip if unchanged and not forced
/// 3. Build the survey completely
/// 4. Publish it in one swap
pub struct RegenerateSurveyHandler {
    source: Arc<dyn ResourceSource>,
    registry: Arc<SurveyRegistry>,
    builder: SurveyBuilder,
}

impl RegenerateSurveyHandler {
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
        cmd: RegenerateSurveyCommand,
    ) -> Result<RegenerationOutcome, RegenerateSurveyError> {
        let _guard = self.registry.lock_regeneration().await;

        let loaded = self.source.load().await?;

        if !cmd.force {
            if let Some(current) = self.registry.current() {
                if current.fingerprint == loaded.fingerprint {
                    debug!(source = %self.source.describe(), "catalog unchanged, keeping snapshot");
                    return Ok(RegenerationOutcome::Unchanged(RegenerationStats {
                        snapshot_id: current.id,
                        version: current.version,
                        resources: current.resource_count,
                        questions: current.survey.questions.len(),
                        rules: current.survey.rules.len(),
                    }));
                }
            }
        }

        let survey = self.builder.build(&loaded.catalog);
        let resources = loaded.catalog.resources.len();
        let snapshot = self.registry.publish(survey, loaded.fingerprint, resources);

        info!(
            source = %self.source.describe(),
            resources,
            version = snapshot.version,
            "survey regenerated"
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
