//! Threshold matching for a single raw score.

use scoremap_model::SubjectRuleSet;

/// Returns the assigned score of the highest threshold `raw_score` clears.
///
/// An absent raw score, an empty rule set and a raw score below every
/// threshold all yield `None`.
pub fn match_score(raw_score: Option<f64>, rules: &SubjectRuleSet) -> Option<f64> {
    let raw_score = raw_score?;
    rules
        .descending()
        .iter()
        .find(|rule| raw_score >= rule.min_raw_score)
        .map(|rule| rule.assigned_score)
}
