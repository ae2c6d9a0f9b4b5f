//! Output column ordering.

use scoremap_model::LayoutPolicy;

use crate::subjects::ResolvedSubject;

/// Where an output column takes its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Index into the raw table's columns.
    Original(usize),
    /// Index into the resolved subjects.
    Assigned(usize),
    Total,
}

/// Orders original, generated and total columns according to `layout`.
pub fn column_plan(
    original_width: usize,
    subjects: &[ResolvedSubject],
    layout: LayoutPolicy,
) -> Vec<ColumnSource> {
    let mut plan = Vec::with_capacity(original_width + subjects.len() + 1);
    match layout {
        LayoutPolicy::AfterSubject => {
            for idx in 0..original_width {
                plan.push(ColumnSource::Original(idx));
                if let Some(subject) = subjects.iter().position(|s| s.raw_index == idx) {
                    plan.push(ColumnSource::Assigned(subject));
                }
            }
        }
        LayoutPolicy::End => {
            plan.extend((0..original_width).map(ColumnSource::Original));
            plan.extend((0..subjects.len()).map(ColumnSource::Assigned));
        }
    }
    plan.push(ColumnSource::Total);
    plan
}
