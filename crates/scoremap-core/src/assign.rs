//! Table-wide score assignment.
//!
//! Every row is processed independently: each resolved subject's raw cell is
//! parsed, matched against that subject's rules, and the numeric results are
//! summed into the row total. The output is a new table; the inputs are only
//! borrowed.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span, trace};

use scoremap_model::{
    AssignError, AssignOptions, AugmentedTable, CellValue, RawTable, Result, RuleTable, parse_f64,
};

use crate::layout::{ColumnSource, column_plan};
use crate::matcher::match_score;
use crate::subjects::{ResolvedSubject, resolve_subjects};

/// Per-subject counts collected while assigning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectStats {
    pub subject: String,
    pub output_column: String,
    pub rule_count: usize,
    /// Rows that received an assigned score.
    pub assigned: usize,
    /// Rows with an empty raw cell.
    pub blank: usize,
    /// Rows whose raw cell is not a number.
    pub unparsed: usize,
    /// Rows with a number that cleared no threshold.
    pub unmatched: usize,
    /// First non-numeric raw value seen, for diagnostics.
    #[serde(skip)]
    pub unparsed_example: Option<String>,
}

impl SubjectStats {
    fn new(subject: &ResolvedSubject) -> Self {
        Self {
            subject: subject.name.clone(),
            output_column: subject.output_column.clone(),
            rule_count: subject.rules.len(),
            ..Self::default()
        }
    }
}

/// An augmented table together with the statistics of how it was built.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub table: AugmentedTable,
    pub subjects: Vec<SubjectStats>,
    /// Rule-table subjects with no matching raw column.
    pub skipped_subjects: Vec<String>,
    /// Rows where at least one subject produced an assigned score.
    pub rows_with_total: usize,
}

/// Builds the augmented table for `raw` using `rules`.
///
/// # Errors
///
/// Returns an error for structural problems only: a raw table without
/// columns, a generated column name that is already taken, or duplicate
/// thresholds under [`DuplicateThresholdPolicy::Reject`](scoremap_model::DuplicateThresholdPolicy).
pub fn assign(raw: &RawTable, rules: &RuleTable, options: &AssignOptions) -> Result<AugmentedTable> {
    assign_detailed(raw, rules, options).map(|assignment| assignment.table)
}

/// Like [`assign`], also returning per-subject statistics.
pub fn assign_detailed(
    raw: &RawTable,
    rules: &RuleTable,
    options: &AssignOptions,
) -> Result<Assignment> {
    let span = info_span!("assign", layout = %options.layout, rows = raw.row_count());
    let _guard = span.enter();
    let start = Instant::now();

    if raw.columns().is_empty() {
        return Err(AssignError::RawTableEmpty);
    }
    let resolution = resolve_subjects(raw, rules, options)?;
    let subjects = resolution.subjects;
    let plan = column_plan(raw.columns().len(), &subjects, options.layout);
    let columns = plan
        .iter()
        .map(|source| match *source {
            ColumnSource::Original(idx) => raw.columns()[idx].clone(),
            ColumnSource::Assigned(idx) => subjects[idx].output_column.clone(),
            ColumnSource::Total => options.total_column.clone(),
        })
        .collect();
    debug!(
        subject_count = subjects.len(),
        skipped = resolution.skipped.len(),
        "column plan ready"
    );

    let mut stats: Vec<SubjectStats> = subjects.iter().map(SubjectStats::new).collect();
    let mut table = AugmentedTable::new(columns);
    let mut rows_with_total = 0usize;
    let mut assigned = vec![None; subjects.len()];
    for (row_idx, row) in raw.rows().iter().enumerate() {
        for (subject_idx, subject) in subjects.iter().enumerate() {
            assigned[subject_idx] =
                assign_cell(&row[subject.raw_index], subject, &mut stats[subject_idx]);
        }
        let total = row_total(&assigned);
        if total.is_some() {
            rows_with_total += 1;
        }
        trace!(row = row_idx, total = ?total, "row assigned");
        let cells = plan
            .iter()
            .map(|source| match *source {
                ColumnSource::Original(idx) => CellValue::Text(row[idx].clone()),
                ColumnSource::Assigned(idx) => CellValue::from(assigned[idx]),
                ColumnSource::Total => CellValue::from(total),
            })
            .collect();
        table.push_row(cells)?;
    }

    info!(
        rows = table.row_count(),
        columns = table.columns().len(),
        subject_count = subjects.len(),
        rows_with_total,
        duration_ms = start.elapsed().as_millis(),
        "assignment complete"
    );
    Ok(Assignment {
        table,
        subjects: stats,
        skipped_subjects: resolution.skipped,
        rows_with_total,
    })
}

fn assign_cell(raw_value: &str, subject: &ResolvedSubject, stats: &mut SubjectStats) -> Option<f64> {
    let Some(score) = parse_f64(raw_value) else {
        if raw_value.trim().is_empty() {
            stats.blank += 1;
        } else {
            stats.unparsed += 1;
            if stats.unparsed_example.is_none() {
                stats.unparsed_example = Some(raw_value.to_string());
            }
        }
        return None;
    };
    let result = match_score(Some(score), &subject.rules);
    match result {
        Some(_) => stats.assigned += 1,
        None => stats.unmatched += 1,
    }
    result
}

/// Sum of the defined values; `None` when none are defined.
fn row_total(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .flatten()
        .fold(None, |sum, value| Some(sum.unwrap_or(0.0) + value))
}
