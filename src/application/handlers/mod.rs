//! Application layer handlers.
//!
//! Commands rebuild or replace the published survey; queries read the
//! current snapshot.

mod get_question;
mod get_survey;
mod regenerate_survey;
mod replace_catalog;
mod resolve_answers;

pub use get_question::{
    GetQuestionError, GetQuestionHandler, GetQuestionQuery, QuestionDetail, QuestionOptionView,
};
pub use get_survey::{GetSurveyHandler, PublicOption, PublicQuestion, PublicSurvey};
pub use regenerate_survey::{
    RegenerateSurveyCommand, RegenerateSurveyError, RegenerateSurveyHandler, RegenerationOutcome,
    RegenerationStats,
};
pub use replace_catalog::{ReplaceCatalogCommand, ReplaceCatalogError, ReplaceCatalogHandler};
pub use resolve_answers::{ResolutionResult, ResolveAnswersHandler, ResolveAnswersQuery, ResolveError};
