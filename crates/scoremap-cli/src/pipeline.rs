//! Load, assign and write stages of a run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use scoremap_core::{assign_detailed, subject_names};
use scoremap_ingest::{IngestOptions, load_raw_table, load_rule_table};
use scoremap_model::AssignOptions;
use scoremap_output::{default_output_path, write_table};

use crate::logging::redact_value;
use crate::types::{AssignRun, SubjectRules};

#[derive(Debug, Clone)]
pub struct AssignRequest {
    pub scores: PathBuf,
    pub rules: PathBuf,
    /// Defaults to `<scores-stem>_assigned.xlsx`.
    pub output: Option<PathBuf>,
    pub options: AssignOptions,
    pub ingest: IngestOptions,
    pub dry_run: bool,
}

impl AssignRequest {
    pub fn new(scores: impl Into<PathBuf>, rules: impl Into<PathBuf>) -> Self {
        Self {
            scores: scores.into(),
            rules: rules.into(),
            output: None,
            options: AssignOptions::default(),
            ingest: IngestOptions::default(),
            dry_run: false,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.scores))
    }
}

pub fn run_assignment(request: &AssignRequest) -> Result<AssignRun> {
    let span = info_span!("run", scores = %request.scores.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = load_raw_table(&request.scores, &request.ingest).context("load score table")?;
    let rules = load_rule_table(&request.rules, &request.ingest).context("load rule table")?;
    let assignment = assign_detailed(&raw, &rules, &request.options).context("assign scores")?;

    for subject in &assignment.skipped_subjects {
        warn!(subject = %subject, "rule table subject not found in score table");
    }
    for stats in &assignment.subjects {
        if let Some(example) = &stats.unparsed_example {
            warn!(
                subject = %stats.subject,
                count = stats.unparsed,
                example = %redact_value(example),
                "non-numeric raw scores left unassigned"
            );
        }
    }

    let output = if request.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = request.output_path();
        write_table(&path, &assignment.table)
            .with_context(|| format!("write output: {}", path.display()))?;
        Some(path)
    };

    info!(
        rows = assignment.table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(AssignRun {
        scores: request.scores.clone(),
        rules: request.rules.clone(),
        output,
        options: request.options.clone(),
        rows: assignment.table.row_count(),
        columns: assignment.table.columns().len(),
        rows_with_total: assignment.rows_with_total,
        subjects: assignment.subjects,
        skipped_subjects: assignment.skipped_subjects,
        table: assignment.table,
    })
}

/// Describes every subject of a rule table.
pub fn describe_rules(path: &Path, ingest: &IngestOptions) -> Result<Vec<SubjectRules>> {
    let rules = load_rule_table(path, ingest).context("load rule table")?;
    let described = subject_names(&rules)
        .into_iter()
        .map(|(idx, subject)| {
            let set = rules.subject_rules(&rules.subject_columns()[idx]);
            let range = set.threshold_range();
            SubjectRules {
                subject,
                rule_count: set.len(),
                lowest_threshold: range.map(|(low, _)| low),
                highest_threshold: range.map(|(_, high)| high),
                duplicate_thresholds: set.duplicate_thresholds(),
            }
        })
        .collect();
    Ok(described)
}

/// Writes the run result as pretty JSON.
pub fn write_report(path: &Path, run: &AssignRun) -> Result<()> {
    let json = serde_json::to_string_pretty(run).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write report: {}", path.display()))
}
