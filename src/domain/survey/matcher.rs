//! Rule Matcher - First-match-wins resolution of an answer set.
//!
//! Rules are scanned in declaration order, which is the resource order of the
//! catalog. Overlapping rules are resolved purely by that order, so the
//! catalog's ordering is the operator's priority control. Do not replace the
//! scan with an index: order is part of the semantics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Answers, Outcome, Rule};

/// Outcome of resolving an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    /// False when no rule matched and the default was returned.
    pub matched: bool,
    /// Position of the matching rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_index: Option<usize>,
}

/// Stateless matcher over a rule list.
pub struct RuleMatcher;

impl RuleMatcher {
    /// Returns the first rule whose conditions all hold, with its index.
    pub fn first_match<'r>(rules: &'r [Rule], answers: &Answers) -> Option<(usize, &'r Rule)> {
        rules.iter().enumerate().find(|(_, rule)| rule.matches(answers))
    }

    /// Resolves `answers` to the first matching rule's outcome, or `default`.
    ///
    /// # Edge Cases
    /// - Empty rule list: returns the default, `matched = false`
    /// - Answers missing a constrained question: that rule does not match
    /// - Several rules match: the earliest wins
    pub fn resolve(rules: &[Rule], default: &Outcome, answers: &Answers) -> Resolution {
        match Self::first_match(rules, answers) {
            Some((index, rule)) => {
                debug!(rule_index = index, label = %rule.outcome.label, "rule matched");
                Resolution {
                    outcome: rule.outcome.clone(),
                    matched: true,
                    rule_index: Some(index),
                }
            }
            None => {
                debug!(rules = rules.len(), "no rule matched, using default outcome");
                Resolution {
                    outcome: default.clone(),
                    matched: false,
                    rule_index: None,
                }
            }
        }
    }
}
