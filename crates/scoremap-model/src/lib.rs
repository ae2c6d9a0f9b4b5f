//! Data model for score assignment.

pub mod error;
pub mod numeric;
pub mod options;
pub mod rules;
pub mod table;

pub use error::{AssignError, Result};
pub use numeric::{format_numeric, parse_f64};
pub use options::{
    AssignOptions, DEFAULT_ASSIGNED_SUFFIX, DEFAULT_TOTAL_COLUMN, DuplicateThresholdPolicy,
    LayoutPolicy,
};
pub use rules::{RuleColumn, RuleTable, SubjectRuleSet, ThresholdRule};
pub use table::{AugmentedTable, CellValue, RawTable};
