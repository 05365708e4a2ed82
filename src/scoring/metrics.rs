//! Recall/precision computation with the no-false-positive invariant.
//!
//! Recall is measured against the true answer set (`tp / (tp + fn)`);
//! precision is measured against the engine's examined candidates
//! (`tp / (tp + fp)` with `fp = candidate_count - tp`), so it captures
//! filtering overhead rather than answer wrongness. Wrong answers are
//! not scored at all: a reported ID outside the true set aborts the run.

use crate::error::{RangebenchError, Result};
use crate::formats::ResultSet;
use crate::oracle::TruthSet;

/// Scores for a single query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryScore {
    pub query: usize,
    pub recall: f64,
    pub precision: f64,
}

impl QueryScore {
    /// The per-query report line (4 decimal places).
    pub fn format_line(&self) -> String {
        format!(
            "recall = {:.4}, cur_precision = {:.4}",
            self.recall, self.precision
        )
    }
}

/// Per-query scores plus aggregate averages and the optional pass-through
/// diagnostic line from the result file.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub per_query: Vec<QueryScore>,
    pub avg_recall: f64,
    pub avg_precision: f64,
    pub log: Option<String>,
}

impl ScoreReport {
    /// The aggregate report line (6 decimal places).
    pub fn format_average_line(&self) -> String {
        format!(
            "[AVERAGE] recall = {:.6}, precision = {:.6}",
            self.avg_recall, self.avg_precision
        )
    }
}

/// Score an engine's results against the ground truth.
///
/// Iterates truth indices in ascending order. Every truth index must
/// have a result entry ([`RangebenchError::MissingQuery`] otherwise);
/// result entries with no truth counterpart are ignored with a warning.
///
/// Fatal invariant: every reported ID must be a true positive. A false
/// positive ID means the engine under test is unsound and the whole
/// scoring run aborts with [`RangebenchError::FalsePositive`].
pub fn score_results(truth: &TruthSet, results: &ResultSet) -> Result<ScoreReport> {
    for index in results.entries.keys() {
        if !truth.contains_key(index) {
            log::warn!("Result entry for query {index} has no truth entry; ignoring");
        }
    }

    let mut per_query = Vec::with_capacity(truth.len());
    let mut total_recall = 0.0;
    let mut total_precision = 0.0;

    for (&index, true_ids) in truth {
        let entry = results
            .entries
            .get(&index)
            .ok_or(RangebenchError::MissingQuery(index))?;

        let tp = true_ids
            .iter()
            .filter(|id| entry.reported.contains(id))
            .count();
        if tp != entry.reported.len() {
            return Err(RangebenchError::FalsePositive {
                query: index,
                tp,
                reported: entry.reported.len(),
            });
        }

        let fn_ = true_ids.len() - tp;
        let fp = entry.candidate_count - tp;

        let recall = ratio(tp, tp + fn_);
        let precision = ratio(tp, tp + fp);
        total_recall += recall;
        total_precision += precision;
        per_query.push(QueryScore {
            query: index,
            recall,
            precision,
        });
    }

    let n = per_query.len();
    let (avg_recall, avg_precision) = if n == 0 {
        (0.0, 0.0)
    } else {
        (total_recall / n as f64, total_precision / n as f64)
    };

    Ok(ScoreReport {
        per_query,
        avg_recall,
        avg_precision,
        log: results.log.clone(),
    })
}

/// `num / den`, guarded to 0.0 on an empty denominator.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
