//! Structural errors raised before any per-row work begins.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AssignError {
    /// The rule table lacks an assigned-score column or any subject column.
    #[error(
        "rule table needs an assigned-score column and at least one subject column, found {columns} column(s)"
    )]
    RuleTableTooNarrow { columns: usize },

    /// The raw score table has no columns at all.
    #[error("raw score table has no columns")]
    RawTableEmpty,

    /// A generated column name is already taken.
    #[error("generated column '{column}' collides with an existing column")]
    ColumnCollision { column: String },

    /// A subject lists the same minimum raw score twice.
    #[error("subject '{subject}' declares threshold {threshold} more than once")]
    DuplicateThreshold { subject: String, threshold: f64 },

    /// A row pushed onto an augmented table has the wrong number of cells.
    #[error("row {row} has {found} cell(s), expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout '{value}' (expected after_subject or end)")]
    InvalidLayout { value: String },
}

pub type Result<T> = std::result::Result<T, AssignError>;
