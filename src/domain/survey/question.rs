//! Question and option types.
//!
//! A survey's questions form a fixed linear sequence: every option of a
//! question points to the same following question, and the last question's
//! options point nowhere. Per-answer routing does not exist; the outcome is
//! decided later by the rule list.

use serde::{Deserialize, Serialize};

use super::labels::FixedOption;

/// Which axis a generated question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Category,
    Budget,
    Format,
    Experience,
}

impl QuestionKind {
    /// Question text shown to visitors.
    pub fn text(&self) -> &'static str {
        match self {
            QuestionKind::Category => "What are you most interested in?",
            QuestionKind::Budget => "What's your budget?",
            QuestionKind::Format => "How do you prefer to work?",
            QuestionKind::Experience => "What's your experience level?",
        }
    }

    /// Secondary line under the question text.
    pub fn subtitle(&self) -> &'static str {
        match self {
            QuestionKind::Category => "Pick what resonates with your current focus",
            QuestionKind::Budget => "This helps me recommend the right fit",
            QuestionKind::Format => "Choose your style",
            QuestionKind::Experience => "In your primary area of interest",
        }
    }
}

/// Answer style of a question. Only single-select exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Single,
}

/// One choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyOption {
    /// Display text; may start with a glyph.
    pub label: String,
    /// Recorded answer. Falls back to `label` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Id of the following question; absent on the terminal question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SurveyOption {
    /// Creates an option with explicit value and description.
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            description: Some(description.into()),
            next: None,
        }
    }

    pub(crate) fn fixed((label, value, description): FixedOption) -> Self {
        Self::new(label, value, description)
    }

    /// The value recorded when this option is picked.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }
}

/// One survey screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `q1`, `q2`, ... in generation order.
    pub id: String,
    pub kind: QuestionKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    pub options: Vec<SurveyOption>,
}

impl Question {
    /// Position-derived id for the question at `index` (0-based).
    pub fn id_for(index: usize) -> String {
        format!("q{}", index + 1)
    }

    /// Creates a question of `kind` with its standard text.
    pub fn new(id: impl Into<String>, kind: QuestionKind, options: Vec<SurveyOption>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: kind.text().to_string(),
            subtitle: Some(kind.subtitle().to_string()),
            question_type: QuestionType::Single,
            options,
        }
    }

    /// The question every option leads to, if any.
    pub fn next(&self) -> Option<&str> {
        self.options.first().and_then(|o| o.next.as_deref())
    }

    /// True when no option leads anywhere.
    pub fn is_terminal(&self) -> bool {
        self.options.iter().all(|o| o.next.is_none())
    }

    /// Finds the option recorded under `value`.
    pub fn option(&self, value: &str) -> Option<&SurveyOption> {
        self.options.iter().find(|o| o.value() == value)
    }
}
