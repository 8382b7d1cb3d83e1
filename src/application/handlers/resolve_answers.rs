//! ResolveAnswersHandler - Query handler mapping a completed answer set to
//! a recommendation.

use std::sync::Arc;

use serde::Serialize;

use crate::application::SurveyRegistry;
use crate::domain::foundation::{DomainError, ErrorCode, SnapshotId};
use crate::domain::survey::{Answers, Outcome};

/// Query to resolve an answer set.
#[derive(Debug, Clone, Default)]
pub struct ResolveAnswersQuery {
    /// Question id to selected option value.
    pub answers: Answers,
}

impl ResolveAnswersQuery {
    pub fn new(answers: Answers) -> Self {
        Self { answers }
    }
}

/// Recommendation for an answer set, tagged with the snapshot that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub snapshot_id: SnapshotId,
    pub outcome: Outcome,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_index: Option<usize>,
}

/// Error type for answer resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No survey has been published yet.
    SurveyNotReady,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::SurveyNotReady => write!(f, "Survey has not been generated yet"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<ResolveError> for DomainError {
    fn from(err: ResolveError) -> Self {
        DomainError::new(ErrorCode::SurveyNotReady, err.to_string())
    }
}

/// Handler for resolving answers against the published survey.
pub struct ResolveAnswersHandler {
    registry: Arc<SurveyRegistry>,
}

impl ResolveAnswersHandler {
    pub fn new(registry: Arc<SurveyRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, query: ResolveAnswersQuery) -> Result<ResolutionResult, ResolveError> {
        let snapshot = self.registry.current().ok_or(ResolveError::SurveyNotReady)?;
        let resolution = snapshot.survey.resolve(&query.answers);

        Ok(ResolutionResult {
            snapshot_id: snapshot.id,
            outcome: resolution.outcome,
            matched: resolution.matched,
            rule_index: resolution.rule_index,
        })
    }
}
