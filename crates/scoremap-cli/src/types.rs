use std::path::PathBuf;

use serde::Serialize;

use scoremap_core::SubjectStats;
use scoremap_model::{AssignOptions, AugmentedTable};

/// Result of one `assign` run, also written as the JSON report.
#[derive(Debug, Serialize)]
pub struct AssignRun {
    pub scores: PathBuf,
    pub rules: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub options: AssignOptions,
    pub rows: usize,
    pub columns: usize,
    pub rows_with_total: usize,
    pub subjects: Vec<SubjectStats>,
    pub skipped_subjects: Vec<String>,
    #[serde(skip)]
    pub table: AugmentedTable,
}

/// One subject of a rule table, as listed by `subjects`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRules {
    pub subject: String,
    pub rule_count: usize,
    pub lowest_threshold: Option<f64>,
    pub highest_threshold: Option<f64>,
    pub duplicate_thresholds: Vec<f64>,
}
