use anyhow::{Context, Result};

use scoremap_cli::pipeline::{AssignRequest, describe_rules, run_assignment, write_report};
use scoremap_cli::types::{AssignRun, SubjectRules};
use scoremap_ingest::IngestOptions;
use scoremap_model::AssignOptions;

use crate::cli::{AssignArgs, SubjectsArgs};

fn ingest_options(encoding: Option<&str>) -> Result<IngestOptions> {
    let options = IngestOptions::default();
    match encoding {
        Some(label) => options
            .with_fallback_label(label)
            .context("resolve --encoding"),
        None => Ok(options),
    }
}

pub fn run_assign(args: &AssignArgs) -> Result<AssignRun> {
    let request = AssignRequest {
        scores: args.scores.clone(),
        rules: args.rules.clone(),
        output: args.output.clone(),
        options: AssignOptions::default()
            .with_layout(args.layout.into())
            .with_duplicate_thresholds(args.duplicate_thresholds.into())
            .with_assigned_suffix(args.assigned_suffix.as_str())
            .with_total_column(args.total_column.as_str()),
        ingest: ingest_options(args.encoding.as_deref())?,
        dry_run: args.dry_run,
    };
    let run = run_assignment(&request)?;
    if let Some(path) = &args.report {
        write_report(path, &run)?;
    }
    Ok(run)
}

pub fn run_subjects(args: &SubjectsArgs) -> Result<Vec<SubjectRules>> {
    let ingest = ingest_options(args.encoding.as_deref())?;
    describe_rules(&args.rules, &ingest)
}
