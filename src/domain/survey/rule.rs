//! Routing rules and their outcomes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::labels;
use crate::domain::catalog::Resource;

/// Answers collected across a visitor's session: question id to option value.
pub type Answers = HashMap<String, String>;

/// Conjunction of question-id → required answer value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conditions(BTreeMap<String, String>);

impl Conditions {
    /// Creates an empty (always satisfied) condition set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `question_id` to be answered with `value`.
    pub fn require(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    /// Required value for a question, if constrained.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// Iterates `(question_id, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every condition equals the corresponding answer exactly.
    ///
    /// A missing answer fails its condition.
    pub fn is_satisfied_by(&self, answers: &Answers) -> bool {
        self.0
            .iter()
            .all(|(question_id, value)| answers.get(question_id) == Some(value))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Recommendation payload shown to a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub url: String,
    pub label: String,
    pub description: String,
    pub cta: String,
    pub emoji: String,
}

impl Outcome {
    /// Builds the outcome that recommends `resource`.
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            url: resource.url.clone(),
            label: resource.name.clone(),
            description: resource.description.clone(),
            cta: labels::cta_for(&resource.id).to_string(),
            emoji: labels::emoji_for(&resource.id).to_string(),
        }
    }

    /// Generic outcome used when the catalog has no free resource.
    pub fn connect() -> Self {
        Self {
            url: "https://twitter.com".to_string(),
            label: "Connect with me".to_string(),
            description: "Let's chat about what you need".to_string(),
            cta: "DM Me".to_string(),
            emoji: "👋".to_string(),
        }
    }
}

/// One routing entry: if all conditions hold, recommend the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "if")]
    pub conditions: Conditions,
    #[serde(rename = "then")]
    pub outcome: Outcome,
}

impl Rule {
    pub fn new(conditions: Conditions, outcome: Outcome) -> Self {
        Self { conditions, outcome }
    }

    /// True when `answers` satisfy every condition.
    pub fn matches(&self, answers: &Answers) -> bool {
        self.conditions.is_satisfied_by(answers)
    }
}
