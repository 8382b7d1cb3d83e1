//! GetSurveyHandler - Query handler for the public survey payload.
//!
//! The public view hides routing: options carry no `next`, and rules and
//! the default outcome stay server-side.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::application::{SurveyRegistry, SurveySnapshot};
use crate::domain::foundation::SnapshotId;
use crate::domain::survey::{Question, QuestionType};

use super::ResolveError;

/// Option without routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Question without routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<PublicOption>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            subtitle: question.subtitle.clone(),
            question_type: question.question_type,
            options: question
                .options
                .iter()
                .map(|o| PublicOption {
                    label: o.label.clone(),
                    value: o.value().to_string(),
                    description: o.description.clone(),
                })
                .collect(),
        }
    }
}

/// Survey payload served to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicSurvey {
    pub snapshot_id: SnapshotId,
    pub title: String,
    pub subtitle: String,
    pub first_question: Option<String>,
    pub questions: Vec<PublicQuestion>,
    pub links: Vec<Value>,
}

impl From<&SurveySnapshot> for PublicSurvey {
    fn from(snapshot: &SurveySnapshot) -> Self {
        let survey = &snapshot.survey;
        Self {
            snapshot_id: snapshot.id,
            title: survey.title.clone(),
            subtitle: survey.subtitle.clone(),
            first_question: survey.first_question_id().map(str::to_string),
            questions: survey.questions.iter().map(PublicQuestion::from).collect(),
            links: survey.links.clone(),
        }
    }
}

/// Handler for the public survey payload.
pub struct GetSurveyHandler {
    registry: Arc<SurveyRegistry>,
}

impl GetSurveyHandler {
    pub fn new(registry: Arc<SurveyRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> Result<PublicSurvey, ResolveError> {
        let snapshot = self.registry.current().ok_or(ResolveError::SurveyNotReady)?;
        Ok(PublicSurvey::from(snapshot.as_ref()))
    }
}
