//! CLI library components for score assignment.

pub mod logging;
pub mod pipeline;
pub mod types;
