//! GetQuestionHandler - Query handler for a single survey screen.

use std::sync::Arc;

use serde::Serialize;

use crate::application::SurveyRegistry;
use crate::domain::foundation::{DomainError, ErrorCode, SnapshotId};
use crate::domain::survey::{Question, QuestionType};

/// Query for one question by id.
#[derive(Debug, Clone)]
pub struct GetQuestionQuery {
    pub question_id: String,
}

impl GetQuestionQuery {
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
        }
    }
}

/// Option as served to the client, with its follow-up screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOptionView {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    /// Id of the next question; null on the last screen.
    pub next: Option<String>,
}

/// A single question with routing information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDetail {
    pub snapshot_id: SnapshotId,
    pub id: String,
    pub text: String,
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<QuestionOptionView>,
    pub is_last: bool,
}

impl QuestionDetail {
    fn from_question(snapshot_id: SnapshotId, question: &Question) -> Self {
        Self {
            snapshot_id,
            id: question.id.clone(),
            text: question.text.clone(),
            subtitle: question.subtitle.clone(),
            question_type: question.question_type,
            options: question
                .options
                .iter()
                .map(|o| QuestionOptionView {
                    label: o.label.clone(),
                    value: o.value().to_string(),
                    description: o.description.clone(),
                    next: o.next.clone(),
                })
                .collect(),
            is_last: question.is_terminal(),
        }
    }
}

/// Error type for question lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetQuestionError {
    /// No survey has been published yet.
    SurveyNotReady,
    /// The current survey has no question with this id.
    QuestionNotFound(String),
}

impl std::fmt::Display for GetQuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetQuestionError::SurveyNotReady => write!(f, "Survey has not been generated yet"),
            GetQuestionError::QuestionNotFound(id) => write!(f, "Question not found: {}", id),
        }
    }
}

impl std::error::Error for GetQuestionError {}

impl From<GetQuestionError> for DomainError {
    fn from(err: GetQuestionError) -> Self {
        match &err {
            GetQuestionError::SurveyNotReady => {
                DomainError::new(ErrorCode::SurveyNotReady, err.to_string())
            }
            GetQuestionError::QuestionNotFound(id) => {
                DomainError::new(ErrorCode::QuestionNotFound, err.to_string())
                    .with_detail("question_id", id.clone())
            }
        }
    }
}

/// Handler for serving one question.
pub struct GetQuestionHandler {
    registry: Arc<SurveyRegistry>,
}

impl GetQuestionHandler {
    pub fn new(registry: Arc<SurveyRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, query: GetQuestionQuery) -> Result<QuestionDetail, GetQuestionError> {
        let snapshot = self
            .registry
            .current()
            .ok_or(GetQuestionError::SurveyNotReady)?;

        let question = snapshot
            .survey
            .question(&query.question_id)
            .ok_or_else(|| GetQuestionError::QuestionNotFound(query.question_id.clone()))?;

        Ok(QuestionDetail::from_question(snapshot.id, question))
    }
}
