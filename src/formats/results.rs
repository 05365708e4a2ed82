//! Engine result file format: line 1 is the query count `Q`; then, per
//! query, a `queryIndex answerCount candidateCount` line followed by the
//! reported-ID line. Optionally a trailing marker line containing
//! `Query Log` announces one final free-text diagnostic line.

use crate::error::{RangebenchError, Result};
use crate::formats::truth::parse_id_line;
use crate::formats::LineCursor;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Marker substring announcing a trailing diagnostic line.
const LOG_MARKER: &str = "Query Log";

/// One query's answer as reported by the engine under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// IDs the engine returned as the final answer.
    pub reported: HashSet<u64>,
    /// Candidates the engine examined before filtering; the
    /// false-positive denominator for precision.
    pub candidate_count: usize,
}

/// All per-query entries plus the optional diagnostic log line.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub entries: BTreeMap<usize, ResultEntry>,
    pub log: Option<String>,
}

/// Read an engine result file.
pub fn read_results(path: &Path) -> Result<ResultSet> {
    let text = std::fs::read_to_string(path)?;
    let mut cursor = LineCursor::new(path, &text);

    let q = cursor.read_count()?;
    let mut entries = BTreeMap::new();
    for _ in 0..q {
        let line = cursor.next_line()?;
        let [index, count, candidates] = cursor.fields(line)?;
        let index: usize = cursor.parse(index, "query index")?;
        let count: usize = cursor.parse(count, "answer count")?;
        let candidate_count: usize = cursor.parse(candidates, "candidate count")?;

        // parse_id_line rejects duplicates, so this set is the same size.
        let reported: HashSet<u64> = parse_id_line(&mut cursor, count)?.into_iter().collect();
        if candidate_count < reported.len() {
            return Err(RangebenchError::InvalidInput(format!(
                "query {index}: candidate count {candidate_count} is less than reported answer count {}",
                reported.len()
            )));
        }
        if entries
            .insert(
                index,
                ResultEntry {
                    reported,
                    candidate_count,
                },
            )
            .is_some()
        {
            return Err(cursor.error(format!("duplicate query index {index}")));
        }
    }

    // Optional trailer: a marker line, then the diagnostic itself.
    let mut log = None;
    if let Some(line) = cursor.try_next_line() {
        if line.contains(LOG_MARKER) {
            log = Some(cursor.next_line()?.to_string());
        }
    }

    Ok(ResultSet { entries, log })
}
