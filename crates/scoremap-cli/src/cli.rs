//! CLI argument definitions for score assignment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use scoremap_model::{
    DEFAULT_ASSIGNED_SUFFIX, DEFAULT_TOTAL_COLUMN, DuplicateThresholdPolicy, LayoutPolicy,
};

#[derive(Parser)]
#[command(
    name = "scoremap",
    version,
    about = "Convert raw exam scores to assigned scores using threshold rule tables",
    long_about = "Convert raw per-subject exam scores into assigned scores.\n\n\
                  Reads a score table and a rule table (CSV or spreadsheet) and writes\n\
                  the scores with one assigned column per subject plus a row total."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow raw score values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assign scores and write the augmented table.
    Assign(AssignArgs),

    /// List the subjects and bands of a rule table.
    Subjects(SubjectsArgs),
}

#[derive(Parser)]
pub struct AssignArgs {
    /// Raw score table (.csv, .xlsx, .xls, .ods).
    #[arg(value_name = "SCORES")]
    pub scores: PathBuf,

    /// Rule table: assigned score in the first column, one threshold column per subject.
    #[arg(value_name = "RULES")]
    pub rules: PathBuf,

    /// Output file; `.csv` writes CSV, anything else XLSX
    /// (default: <SCORES>_assigned.xlsx).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Placement of the generated columns.
    #[arg(long = "layout", value_enum, default_value = "after-subject")]
    pub layout: LayoutArg,

    /// How to treat a subject listing the same threshold twice.
    #[arg(long = "duplicate-thresholds", value_enum, default_value = "first-wins")]
    pub duplicate_thresholds: DuplicateArg,

    /// Suffix of each generated subject column.
    #[arg(long = "assigned-suffix", default_value = DEFAULT_ASSIGNED_SUFFIX)]
    pub assigned_suffix: String,

    /// Name of the row total column.
    #[arg(long = "total-column", default_value = DEFAULT_TOTAL_COLUMN)]
    pub total_column: String,

    /// Encoding for CSV files that are not UTF-8 (e.g. gbk, windows-1252).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Assign and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SubjectsArgs {
    #[arg(value_name = "RULES")]
    pub rules: PathBuf,

    /// Encoding for CSV files that are not UTF-8.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    AfterSubject,
    End,
}

impl From<LayoutArg> for LayoutPolicy {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::AfterSubject => LayoutPolicy::AfterSubject,
            LayoutArg::End => LayoutPolicy::End,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DuplicateArg {
    FirstWins,
    Reject,
}

impl From<DuplicateArg> for DuplicateThresholdPolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::FirstWins => DuplicateThresholdPolicy::FirstWins,
            DuplicateArg::Reject => DuplicateThresholdPolicy::Reject,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
