//! Survey aggregate: the generated questionnaire plus its routing data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Answers, Outcome, Question, QuestionKind, Resolution, Rule, RuleMatcher};

pub const SURVEY_TITLE: &str = "Let's find the right resource for you";
pub const SURVEY_SUBTITLE: &str = "Answer a few quick questions";

/// The generated questionnaire, its rule list and fallback outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<Question>,
    pub rules: Vec<Rule>,
    #[serde(rename = "default")]
    pub default_outcome: Outcome,
    /// Catalog links, unrelated to matching.
    #[serde(default)]
    pub links: Vec<Value>,
}

impl Survey {
    /// Looks a question up by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// The generated question of `kind`, if it was emitted.
    pub fn question_of_kind(&self, kind: QuestionKind) -> Option<&Question> {
        self.questions.iter().find(|q| q.kind == kind)
    }

    /// Id of the first screen.
    pub fn first_question_id(&self) -> Option<&str> {
        self.questions.first().map(|q| q.id.as_str())
    }

    /// Resolves `answers` against this survey's rules.
    pub fn resolve(&self, answers: &Answers) -> Resolution {
        RuleMatcher::resolve(&self.rules, &self.default_outcome, answers)
    }
}
