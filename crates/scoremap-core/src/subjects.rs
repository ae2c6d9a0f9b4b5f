//! Subject resolution: which rule columns apply to which raw columns.

use std::collections::BTreeSet;

use scoremap_model::{
    AssignError, AssignOptions, DuplicateThresholdPolicy, RawTable, Result, RuleTable,
    SubjectRuleSet,
};
use tracing::{debug, warn};

/// A subject present in both the rule table and the raw table.
#[derive(Debug, Clone)]
pub struct ResolvedSubject {
    /// Trimmed subject name; also the raw column name.
    pub name: String,
    /// Position of the subject's column in the raw table.
    pub raw_index: usize,
    /// Name of the generated assigned-score column.
    pub output_column: String,
    pub rules: SubjectRuleSet,
}

#[derive(Debug, Clone, Default)]
pub struct SubjectResolution {
    /// Subjects in rule-table declaration order.
    pub subjects: Vec<ResolvedSubject>,
    /// Subjects named by the rule table but absent from the raw table.
    pub skipped: Vec<String>,
}

/// Trimmed, non-empty subject names in declaration order, first occurrence kept.
pub fn subject_names(rules: &RuleTable) -> Vec<(usize, String)> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::new();
    for (idx, column) in rules.subject_columns().iter().enumerate() {
        let name = column.header.trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            warn!(subject = %name, "subject listed twice in rule table, keeping first column");
            continue;
        }
        names.push((idx, name.to_string()));
    }
    names
}

/// Matches rule-table subjects against raw columns and validates generated names.
pub fn resolve_subjects(
    raw: &RawTable,
    rules: &RuleTable,
    options: &AssignOptions,
) -> Result<SubjectResolution> {
    let mut resolution = SubjectResolution::default();
    for (column_idx, name) in subject_names(rules) {
        let Some(raw_index) = raw.column_index(&name) else {
            debug!(subject = %name, "subject not present in score table");
            resolution.skipped.push(name);
            continue;
        };
        let subject_rules = rules.subject_rules(&rules.subject_columns()[column_idx]);
        check_duplicates(&name, &subject_rules, options.duplicate_thresholds)?;
        debug!(
            subject = %name,
            raw_index,
            rule_count = subject_rules.len(),
            "resolved subject"
        );
        resolution.subjects.push(ResolvedSubject {
            output_column: options.assigned_column(&name),
            name,
            raw_index,
            rules: subject_rules,
        });
    }
    check_collisions(raw, &resolution.subjects, options)?;
    Ok(resolution)
}

fn check_duplicates(
    subject: &str,
    rules: &SubjectRuleSet,
    policy: DuplicateThresholdPolicy,
) -> Result<()> {
    let duplicates = rules.duplicate_thresholds();
    let Some(&first) = duplicates.first() else {
        return Ok(());
    };
    match policy {
        DuplicateThresholdPolicy::Reject => Err(AssignError::DuplicateThreshold {
            subject: subject.to_string(),
            threshold: first,
        }),
        DuplicateThresholdPolicy::FirstWins => {
            warn!(
                subject = %subject,
                thresholds = ?duplicates,
                "duplicate thresholds, first-declared rule wins"
            );
            Ok(())
        }
    }
}

fn check_collisions(
    raw: &RawTable,
    subjects: &[ResolvedSubject],
    options: &AssignOptions,
) -> Result<()> {
    let mut taken: BTreeSet<&str> = raw.columns().iter().map(String::as_str).collect();
    let generated = subjects
        .iter()
        .map(|subject| subject.output_column.as_str())
        .chain(std::iter::once(options.total_column.as_str()));
    for column in generated {
        if !taken.insert(column) {
            return Err(AssignError::ColumnCollision {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
