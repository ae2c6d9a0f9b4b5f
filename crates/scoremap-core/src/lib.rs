//! Score assignment core.
//!
//! - **matcher**: maps one raw score onto a subject's threshold bands
//! - **subjects**: resolves rule-table subjects against the raw table
//! - **layout**: orders original and generated columns
//! - **assign**: builds the augmented table row by row

pub mod assign;
pub mod layout;
pub mod matcher;
pub mod subjects;

pub use assign::{Assignment, SubjectStats, assign, assign_detailed};
pub use layout::{ColumnSource, column_plan};
pub use matcher::match_score;
pub use subjects::{ResolvedSubject, SubjectResolution, resolve_subjects, subject_names};
