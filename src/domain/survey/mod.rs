//! Survey Module - Question generation and answer resolution.
//!
//! # Components
//!
//! - `Question` / `SurveyOption` - One screen and its choices
//! - `Rule` / `Conditions` / `Outcome` - Routing entries derived one per resource
//! - `Survey` - Aggregate of questions, rules, default outcome and links
//! - `SurveyBuilder` - Builds a `Survey` from a `ResourceCatalog`
//! - `RuleMatcher` - First-match-wins resolution of collected answers
//!
//! Everything here is pure and synchronous. Publication and reload live in
//! the application layer.

mod builder;
mod labels;
mod matcher;
mod question;
mod rule;
mod survey;

pub use builder::{BuilderSettings, SurveyBuilder, MAX_OPTIONS};
pub use labels::{DIY_FORMATS, DIY_VALUE, EXPERIENCE_CATEGORIES, OTHER_VALUE};
pub use matcher::{Resolution, RuleMatcher};
pub use question::{Question, QuestionKind, QuestionType, SurveyOption};
pub use rule::{Answers, Conditions, Outcome, Rule};
pub use survey::{Survey, SURVEY_SUBTITLE, SURVEY_TITLE};
