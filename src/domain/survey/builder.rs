//! Survey Builder - Derives the question sequence and rule list from a catalog.
//!
//! # Question sequence
//!
//! Emitted in fixed order, each step conditional on the data:
//!
//! 1. Category - if any category was observed
//! 2. Budget - always, with four fixed tiers
//! 3. Format - if more than one format was observed
//! 4. Experience - if any observed category is investing, trading or crypto
//!
//! Ids are assigned `q1`, `q2`, ... by position. Every option of a question
//! points to the next question; the last question's options point nowhere.
//!
//! # Rules
//!
//! One rule per resource, in catalog order, with conditions read off the
//! already-built sequence. A resource lacking the attribute a question asks
//! about gets no condition for that question.

use tracing::{debug, warn};

use super::labels::{
    self, BUDGET_OPTIONS, DIY_FORMAT_OPTION, EXPERIENCE_CATEGORIES, EXPERIENCE_OPTIONS,
    OTHER_CATEGORY_OPTION,
};
use super::{Conditions, Outcome, Question, QuestionKind, Rule, Survey, SurveyOption};
use super::{SURVEY_SUBTITLE, SURVEY_TITLE};
use crate::domain::catalog::{Resource, ResourceAnalysis, ResourceAnalyzer, ResourceCatalog};

/// Maximum options on one screen unless configured otherwise.
pub const MAX_OPTIONS: usize = 5;

/// Tunables for survey generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSettings {
    /// Per-question option cap. Must be at least the four budget tiers.
    pub max_options: usize,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            max_options: MAX_OPTIONS,
        }
    }
}

/// Builds a [`Survey`] from a [`ResourceCatalog`].
#[derive(Debug, Clone, Default)]
pub struct SurveyBuilder {
    settings: BuilderSettings,
}

impl SurveyBuilder {
    pub fn new(settings: BuilderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Generates the full survey. Pure; the catalog is not modified.
    pub fn build(&self, catalog: &ResourceCatalog) -> Survey {
        let analysis = ResourceAnalyzer::analyze(&catalog.resources);
        let questions = self.build_questions(&analysis);
        let rules = Self::build_rules(&questions, &catalog.resources);
        let default_outcome = Self::default_outcome(&catalog.resources);

        debug!(
            resources = catalog.resources.len(),
            questions = questions.len(),
            rules = rules.len(),
            "survey built"
        );

        Survey {
            title: SURVEY_TITLE.to_string(),
            subtitle: SURVEY_SUBTITLE.to_string(),
            questions,
            rules,
            default_outcome,
            links: catalog.links.clone(),
        }
    }

    /// Builds the linked question sequence for an analysis.
    pub fn build_questions(&self, analysis: &ResourceAnalysis<'_>) -> Vec<Question> {
        let mut screens: Vec<(QuestionKind, Vec<SurveyOption>)> = Vec::new();

        if !analysis.categories.is_empty() {
            screens.push((
                QuestionKind::Category,
                self.category_options(analysis.categories.values()),
            ));
        }

        screens.push((QuestionKind::Budget, budget_options()));

        if analysis.formats.len() > 1 {
            screens.push((
                QuestionKind::Format,
                self.format_options(analysis.formats.values()),
            ));
        }

        let needs_experience = analysis
            .categories
            .values()
            .iter()
            .any(|c| EXPERIENCE_CATEGORIES.contains(&c.as_str()));
        if needs_experience {
            screens.push((QuestionKind::Experience, experience_options()));
        }

        link_sequence(screens)
    }

    /// Category options. Past the cap, the first `max_options - 1` categories
    /// (by first appearance) are kept and the rest collapse into "Other".
    pub fn category_options(&self, categories: &[String]) -> Vec<SurveyOption> {
        let max = self.settings.max_options;
        if categories.len() <= max {
            return categories.iter().map(|c| category_option(c)).collect();
        }

        let keep = max.saturating_sub(1);
        let mut options: Vec<SurveyOption> =
            categories[..keep].iter().map(|c| category_option(c)).collect();
        options.push(SurveyOption::fixed(OTHER_CATEGORY_OPTION));

        debug!(
            collapsed = categories.len() - keep,
            "categories collapsed into Other"
        );
        options
    }

    /// Format options. Past the cap, tools/checklist/course merge into a
    /// single DIY option; anything still over the cap is dropped with a
    /// warning.
    pub fn format_options(&self, formats: &[String]) -> Vec<SurveyOption> {
        let max = self.settings.max_options;
        let mut options: Vec<SurveyOption> = formats.iter().map(|f| format_option(f)).collect();

        if options.len() > max {
            let has_diy = formats.iter().any(|f| labels::is_diy_format(f));
            options.retain(|o| !labels::is_diy_format(o.value()));
            if has_diy {
                options.push(SurveyOption::fixed(DIY_FORMAT_OPTION));
            }
        }

        if options.len() > max {
            let dropped: Vec<String> = options
                .split_off(max)
                .into_iter()
                .map(|o| o.value().to_string())
                .collect();
            warn!(?dropped, max_options = max, "format options truncated");
        }

        options
    }

    /// One rule per resource, in resource order.
    pub fn build_rules(questions: &[Question], resources: &[Resource]) -> Vec<Rule> {
        resources
            .iter()
            .map(|resource| {
                Rule::new(
                    Self::conditions_for(questions, resource),
                    Outcome::for_resource(resource),
                )
            })
            .collect()
    }

    /// Reads a resource's required answers off the question sequence.
    pub fn conditions_for(questions: &[Question], resource: &Resource) -> Conditions {
        let mut conditions = Conditions::new();

        for question in questions {
            let required = match question.kind {
                QuestionKind::Category => resource.category.as_deref(),
                QuestionKind::Budget => resource.price.as_deref(),
                QuestionKind::Format => resource.format.as_deref().map(|f| {
                    if labels::is_diy_format(f) {
                        labels::DIY_VALUE
                    } else {
                        f
                    }
                }),
                QuestionKind::Experience => resource.experience(),
            };

            if let Some(value) = required {
                conditions.require(&question.id, value);
            }
        }

        conditions
    }

    /// The first free resource, or the generic connect outcome.
    pub fn default_outcome(resources: &[Resource]) -> Outcome {
        resources
            .iter()
            .find(|r| r.is_free())
            .map(Outcome::for_resource)
            .unwrap_or_else(Outcome::connect)
    }
}

fn category_option(tag: &str) -> SurveyOption {
    match labels::category_label(tag) {
        Some((label, description)) => SurveyOption::new(label, tag, description),
        None => SurveyOption::new(tag, tag, ""),
    }
}

fn format_option(tag: &str) -> SurveyOption {
    match labels::format_label(tag) {
        Some((label, description)) => SurveyOption::new(label, tag, description),
        None => SurveyOption::new(tag, tag, ""),
    }
}

fn budget_options() -> Vec<SurveyOption> {
    BUDGET_OPTIONS.into_iter().map(SurveyOption::fixed).collect()
}

fn experience_options() -> Vec<SurveyOption> {
    EXPERIENCE_OPTIONS.into_iter().map(SurveyOption::fixed).collect()
}

/// Assigns positional ids and points every option at the following screen.
fn link_sequence(screens: Vec<(QuestionKind, Vec<SurveyOption>)>) -> Vec<Question> {
    let count = screens.len();

    screens
        .into_iter()
        .enumerate()
        .map(|(index, (kind, mut options))| {
            let next = (index + 1 < count).then(|| Question::id_for(index + 1));
            for option in &mut options {
                option.next = next.clone();
            }
            Question::new(Question::id_for(index), kind, options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Experience, UNDEFINED_AXIS_KEY};
    use crate::domain::survey::{Answers, DIY_VALUE, OTHER_VALUE};

    fn build(resources: Vec<Resource>) -> Survey {
        SurveyBuilder::default().build(&ResourceCatalog::new(resources))
    }

    fn kinds(survey: &Survey) -> Vec<QuestionKind> {
        survey.questions.iter().map(|q| q.kind).collect()
    }

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_catalog_yields_budget_only() {
        let survey = build(vec![]);

        assert_eq!(kinds(&survey), [QuestionKind::Budget]);
        assert_eq!(survey.questions[0].id, "q1");
        assert!(survey.questions[0].is_terminal());
        assert!(survey.rules.is_empty());
        assert_eq!(survey.default_outcome, Outcome::connect());
    }

    #[test]
    fn single_free_checklist_resource() {
        let starter = Resource::new("starter", "learning", "free", "checklist")
            .with_link("Getting Started Guide", "https://example.com/guide");
        let survey = build(vec![starter.clone()]);

        assert_eq!(kinds(&survey), [QuestionKind::Category, QuestionKind::Budget]);
        let category = &survey.questions[0];
        assert_eq!(category.options.len(), 1);
        assert_eq!(category.options[0].value(), "learning");
        assert_eq!(category.options[0].label, "📚 Learning");

        assert_eq!(survey.rules.len(), 1);
        assert_eq!(survey.rules[0].conditions.get("q1"), Some("learning"));
        assert_eq!(survey.rules[0].conditions.get("q2"), Some("free"));
        assert_eq!(survey.rules[0].conditions.len(), 2);

        let resolution = survey.resolve(&answers(&[("q1", "learning"), ("q2", "free")]));
        assert!(resolution.matched);
        assert_eq!(resolution.outcome, Outcome::for_resource(&starter));
        assert_eq!(survey.default_outcome, Outcome::for_resource(&starter));
    }

    #[test]
    fn seven_categories_collapse_into_other() {
        let tags = ["ai", "business", "learning", "gardening", "crypto", "health", "music"];
        let resources = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| Resource::new(format!("r{}", i), *tag, "free", "course"))
            .collect();
        let survey = build(resources);

        let category = survey.question_of_kind(QuestionKind::Category).unwrap();
        let values: Vec<&str> = category.options.iter().map(|o| o.value()).collect();
        assert_eq!(values, ["ai", "business", "learning", "gardening", OTHER_VALUE]);
        assert_eq!(category.options[4].label, "📦 Other");
        assert_eq!(category.options[3].label, "gardening");
        assert_eq!(category.options[3].description.as_deref(), Some(""));
    }

    #[test]
    fn collapsed_category_rule_keeps_raw_tag() {
        let tags = ["a", "b", "c", "d", "e", "f"];
        let resources = tags
            .iter()
            .map(|tag| Resource::new(*tag, *tag, "free", "course"))
            .collect();
        let survey = build(resources);

        assert_eq!(survey.rules[5].conditions.get("q1"), Some("f"));
    }

    #[test]
    fn format_question_needs_two_formats() {
        let survey = build(vec![
            Resource::new("a", "ai", "free", "tools"),
            Resource::new("b", "ai", "paid", "tools"),
        ]);
        assert!(survey.question_of_kind(QuestionKind::Format).is_none());

        let survey = build(vec![
            Resource::new("a", "ai", "free", "tools"),
            Resource::new("b", "ai", "paid", "community"),
        ]);
        let format = survey.question_of_kind(QuestionKind::Format).unwrap();
        let values: Vec<&str> = format.options.iter().map(|o| o.value()).collect();
        assert_eq!(values, ["tools", "community"]);
    }

    #[test]
    fn diy_formats_normalized_in_rules() {
        let survey = build(vec![
            Resource::new("a", "ai", "free", "tools"),
            Resource::new("b", "ai", "paid", "community"),
        ]);

        assert_eq!(survey.rules[0].conditions.get("q3"), Some(DIY_VALUE));
        assert_eq!(survey.rules[1].conditions.get("q3"), Some("community"));
    }

    #[test]
    fn six_formats_merge_diy() {
        let formats = ["done_for_you", "community", "tools", "checklist", "course", "webinar"];
        let builder = SurveyBuilder::default();
        let formats: Vec<String> = formats.iter().map(|f| f.to_string()).collect();

        let options = builder.format_options(&formats);
        let values: Vec<&str> = options.iter().map(|o| o.value()).collect();

        assert_eq!(values, ["done_for_you", "community", "webinar", DIY_VALUE]);
        assert_eq!(options[3].label, "🛠 DIY Resources");
    }

    #[test]
    fn format_overflow_without_diy_is_truncated() {
        let formats: Vec<String> = (0..8).map(|i| format!("f{}", i)).collect();
        let options = SurveyBuilder::default().format_options(&formats);

        assert_eq!(options.len(), MAX_OPTIONS);
        assert_eq!(options[4].value(), "f4");
    }

    #[test]
    fn experience_ladder_uses_first_tier() {
        let resource = Resource::new("trading_tools", "trading", "paid", "tools").with_experience(
            Experience::Ladder(vec!["advanced".to_string(), "intermediate".to_string()]),
        );
        let survey = build(vec![resource]);

        let experience = survey.question_of_kind(QuestionKind::Experience).unwrap();
        assert_eq!(experience.options.len(), 3);
        assert_eq!(survey.rules[0].conditions.get(&experience.id), Some("advanced"));

        let exp_id = experience.id.clone();
        let hit = survey.resolve(&answers(&[
            ("q1", "trading"),
            ("q2", "paid"),
            (exp_id.as_str(), "advanced"),
        ]));
        let miss = survey.resolve(&answers(&[
            ("q1", "trading"),
            ("q2", "paid"),
            (exp_id.as_str(), "intermediate"),
        ]));
        assert!(hit.matched);
        assert!(!miss.matched);
    }

    #[test]
    fn experience_condition_omitted_without_requirement() {
        let survey = build(vec![Resource::new("c", "crypto", "free", "course")]);

        assert!(survey.question_of_kind(QuestionKind::Experience).is_some());
        assert_eq!(survey.rules[0].conditions.len(), 2);
    }

    #[test]
    fn empty_experience_tag_omits_condition() {
        for experience in [
            Experience::Level(String::new()),
            Experience::Ladder(vec![String::new()]),
        ] {
            let resource =
                Resource::new("c", "crypto", "free", "course").with_experience(experience);
            let survey = build(vec![resource]);

            let question = survey.question_of_kind(QuestionKind::Experience).unwrap();
            assert_eq!(survey.rules[0].conditions.len(), 2);
            for option in &question.options {
                let resolution = survey.resolve(&answers(&[
                    ("q1", "crypto"),
                    ("q2", "free"),
                    (question.id.as_str(), option.value()),
                ]));
                assert!(resolution.matched);
                assert_eq!(resolution.rule_index, Some(0));
            }
        }
    }

    #[test]
    fn full_sequence_order_and_links() {
        let survey = build(vec![
            Resource::new("a", "investing", "free", "community"),
            Resource::new("b", "ai", "paid", "course"),
        ]);

        assert_eq!(
            kinds(&survey),
            [
                QuestionKind::Category,
                QuestionKind::Budget,
                QuestionKind::Format,
                QuestionKind::Experience
            ]
        );
        for pair in survey.questions.windows(2) {
            assert!(pair[0].options.iter().all(|o| o.next.as_deref() == Some(pair[1].id.as_str())));
        }
        assert!(survey.questions[3].is_terminal());
    }

    #[test]
    fn missing_axis_values_omit_conditions() {
        let mut bare = Resource::new("bare", "ai", "free", "tools");
        bare.category = None;
        bare.price = None;
        let survey = build(vec![Resource::new("a", "ai", "free", "community"), bare]);

        let category = survey.question_of_kind(QuestionKind::Category).unwrap();
        assert!(category.option(UNDEFINED_AXIS_KEY).is_some());
        assert_eq!(survey.rules[1].conditions.get("q1"), None);
        assert_eq!(survey.rules[1].conditions.get("q2"), None);
        assert_eq!(survey.rules[1].conditions.get("q3"), Some(DIY_VALUE));
    }

    #[test]
    fn default_is_first_free_resource() {
        let survey = build(vec![
            Resource::new("paid", "ai", "1k_10k", "course").with_link("Paid", "https://p"),
            Resource::new("free1", "ai", "free", "course").with_link("Free 1", "https://f1"),
            Resource::new("free2", "ai", "free", "course").with_link("Free 2", "https://f2"),
        ]);

        assert_eq!(survey.default_outcome.label, "Free 1");
    }

    #[test]
    fn links_pass_through() {
        let mut catalog = ResourceCatalog::new(vec![]);
        catalog.links = vec![serde_json::json!({ "label": "Blog", "url": "https://blog" })];

        let survey = SurveyBuilder::default().build(&catalog);
        assert_eq!(survey.links, catalog.links);
    }

    #[test]
    fn rebuild_is_identical() {
        let catalog = ResourceCatalog::new(vec![
            Resource::new("a", "investing", "free", "community"),
            Resource::new("b", "ai", "paid", "course"),
        ]);
        let builder = SurveyBuilder::default();

        assert_eq!(builder.build(&catalog), builder.build(&catalog));
    }
}
