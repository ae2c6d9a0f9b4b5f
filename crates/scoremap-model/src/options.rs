//! Configuration options for score assignment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssignError;

/// Default suffix appended to a subject name for its generated column.
pub const DEFAULT_ASSIGNED_SUFFIX: &str = "_assigned";

/// Default name of the per-row total column.
pub const DEFAULT_TOTAL_COLUMN: &str = "total_assigned";

/// Where generated columns are placed relative to the original columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// Each subject column is immediately followed by its assigned column.
    #[default]
    AfterSubject,
    /// All assigned columns follow the original columns.
    End,
}

impl LayoutPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AfterSubject => "after_subject",
            Self::End => "end",
        }
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutPolicy {
    type Err = AssignError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "after_subject" | "after-subject" => Ok(Self::AfterSubject),
            "end" => Ok(Self::End),
            _ => Err(AssignError::InvalidLayout {
                value: value.to_string(),
            }),
        }
    }
}

/// How to treat a subject that lists the same minimum raw score twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateThresholdPolicy {
    /// The first-declared rule wins; a warning is logged.
    #[default]
    FirstWins,
    /// Fail before any row is processed.
    Reject,
}

/// Options controlling score assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignOptions {
    pub layout: LayoutPolicy,
    pub duplicate_thresholds: DuplicateThresholdPolicy,
    /// Appended to the subject name to form its generated column.
    pub assigned_suffix: String,
    /// Name of the per-row total column.
    pub total_column: String,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            layout: LayoutPolicy::default(),
            duplicate_thresholds: DuplicateThresholdPolicy::default(),
            assigned_suffix: DEFAULT_ASSIGNED_SUFFIX.to_string(),
            total_column: DEFAULT_TOTAL_COLUMN.to_string(),
        }
    }
}

impl AssignOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutPolicy) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_duplicate_thresholds(mut self, policy: DuplicateThresholdPolicy) -> Self {
        self.duplicate_thresholds = policy;
        self
    }

    #[must_use]
    pub fn with_assigned_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.assigned_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_total_column(mut self, name: impl Into<String>) -> Self {
        self.total_column = name.into();
        self
    }

    /// Name of the generated column for `subject`.
    pub fn assigned_column(&self, subject: &str) -> String {
        format!("{subject}{}", self.assigned_suffix)
    }
}
