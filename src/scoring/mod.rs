//! Accuracy scoring: per-query and aggregate recall/precision for an
//! engine's reported results against the ground truth.

pub mod metrics;
pub mod report;

pub use metrics::{score_results, QueryScore, ScoreReport};
pub use report::write_report;
