//! Threshold rule tables.
//!
//! A rule table has the assigned-score value in column 0 and one column of
//! minimum raw scores per subject. A raw score qualifies for a rule when it is
//! greater than or equal to the rule's minimum.

use serde::{Deserialize, Serialize};

use crate::error::{AssignError, Result};
use crate::numeric::parse_f64;

/// One column of minimum raw scores, keyed by its header as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleColumn {
    pub header: String,
    pub thresholds: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    assigned_header: String,
    assigned: Vec<Option<f64>>,
    subjects: Vec<RuleColumn>,
}

impl RuleTable {
    /// Builds a rule table from already-coerced numeric cells.
    ///
    /// `rows` are indexed like `headers`; missing trailing cells are absent.
    pub fn new(headers: Vec<String>, rows: &[Vec<Option<f64>>]) -> Result<Self> {
        if headers.len() < 2 {
            return Err(AssignError::RuleTableTooNarrow {
                columns: headers.len(),
            });
        }
        let cell = |row: &Vec<Option<f64>>, idx: usize| row.get(idx).copied().flatten();
        let mut headers = headers.into_iter();
        let assigned_header = headers.next().unwrap_or_default();
        let assigned = rows.iter().map(|row| cell(row, 0)).collect();
        let subjects = headers
            .enumerate()
            .map(|(offset, header)| RuleColumn {
                header,
                thresholds: rows.iter().map(|row| cell(row, offset + 1)).collect(),
            })
            .collect();
        Ok(Self {
            assigned_header,
            assigned,
            subjects,
        })
    }

    /// Builds a rule table from string cells, coercing non-numeric cells to absent.
    pub fn from_text(headers: Vec<String>, rows: &[Vec<String>]) -> Result<Self> {
        let numeric: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| row.iter().map(|value| parse_f64(value)).collect())
            .collect();
        Self::new(headers, &numeric)
    }

    pub fn assigned_header(&self) -> &str {
        &self.assigned_header
    }

    pub fn assigned_values(&self) -> &[Option<f64>] {
        &self.assigned
    }

    pub fn subject_columns(&self) -> &[RuleColumn] {
        &self.subjects
    }

    pub fn rule_row_count(&self) -> usize {
        self.assigned.len()
    }

    /// Pairs the assigned-score column with one subject column.
    pub fn subject_rules(&self, column: &RuleColumn) -> SubjectRuleSet {
        SubjectRuleSet::from_pairs(
            self.assigned
                .iter()
                .copied()
                .zip(column.thresholds.iter().copied()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub assigned_score: f64,
    pub min_raw_score: f64,
}

/// The rules of one subject, in declaration order and by descending threshold.
///
/// Serialized as the declared rule list; the descending view is rebuilt on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ThresholdRule>", into = "Vec<ThresholdRule>")]
pub struct SubjectRuleSet {
    declared: Vec<ThresholdRule>,
    descending: Vec<ThresholdRule>,
}

impl SubjectRuleSet {
    pub fn new(rules: Vec<ThresholdRule>) -> Self {
        let mut descending = rules.clone();
        // Stable: equal thresholds keep declaration order.
        descending.sort_by(|a, b| b.min_raw_score.total_cmp(&a.min_raw_score));
        Self {
            declared: rules,
            descending,
        }
    }

    /// Keeps only pairs `(assigned_score, min_raw_score)` where both sides are defined.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
    {
        let rules = pairs
            .into_iter()
            .filter_map(|(assigned, min_raw)| {
                Some(ThresholdRule {
                    assigned_score: assigned?,
                    min_raw_score: min_raw?,
                })
            })
            .collect();
        Self::new(rules)
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.declared
    }

    pub fn descending(&self) -> &[ThresholdRule] {
        &self.descending
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Thresholds declared more than once, each reported once.
    pub fn duplicate_thresholds(&self) -> Vec<f64> {
        let mut duplicates: Vec<f64> = Vec::new();
        for pair in self.descending.windows(2) {
            let value = pair[0].min_raw_score;
            if value == pair[1].min_raw_score && duplicates.last() != Some(&value) {
                duplicates.push(value);
            }
        }
        duplicates
    }

    /// Lowest and highest threshold, if any rule exists.
    pub fn threshold_range(&self) -> Option<(f64, f64)> {
        let high = self.descending.first()?.min_raw_score;
        let low = self.descending.last()?.min_raw_score;
        Some((low, high))
    }
}

impl From<Vec<ThresholdRule>> for SubjectRuleSet {
    fn from(rules: Vec<ThresholdRule>) -> Self {
        Self::new(rules)
    }
}

impl From<SubjectRuleSet> for Vec<ThresholdRule> {
    fn from(set: SubjectRuleSet) -> Self {
        set.declared
    }
}
