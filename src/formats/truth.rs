//! Truth file format: line 1 is the query count `Q`; then, per query,
//! a `queryIndex answerCount` line followed by one line of
//! space-separated point IDs (an empty line when the count is 0).

use crate::error::{RangebenchError, Result};
use crate::formats::{reserve_hint, LineCursor};
use crate::oracle::TruthSet;
use std::io::Write;
use std::path::Path;

/// Read a truth file into a query-index → true-ID-list map.
pub fn read_truth(path: &Path) -> Result<TruthSet> {
    let text = std::fs::read_to_string(path)?;
    let mut cursor = LineCursor::new(path, &text);

    let q = cursor.read_count()?;
    let mut truth = TruthSet::new();
    for _ in 0..q {
        let line = cursor.next_line()?;
        let [index, count] = cursor.fields(line)?;
        let index: usize = cursor.parse(index, "query index")?;
        let count: usize = cursor.parse(count, "answer count")?;

        let ids = parse_id_line(&mut cursor, count)?;
        if truth.insert(index, ids).is_some() {
            return Err(cursor.error(format!("duplicate query index {index}")));
        }
    }
    Ok(truth)
}

/// Write a truth file in the declared format.
pub fn write_truth(path: &Path, truth: &TruthSet) -> Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{}", truth.len()).map_err(RangebenchError::Io)?;
    for (index, ids) in truth {
        writeln!(out, "{} {}", index, ids.len()).map_err(RangebenchError::Io)?;
        writeln!(out, "{}", join_ids(ids)).map_err(RangebenchError::Io)?;
    }
    out.flush().map_err(RangebenchError::Io)?;
    Ok(())
}

pub(crate) fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a line of exactly `count` space-separated IDs. A zero count
/// still consumes one (empty) line. IDs must be distinct: a duplicated
/// ID would be double-counted as a true positive downstream.
pub(crate) fn parse_id_line(cursor: &mut LineCursor<'_>, count: usize) -> Result<Vec<u64>> {
    let line = cursor.next_line()?;
    let mut ids = Vec::with_capacity(reserve_hint(count));
    let mut seen = std::collections::HashSet::with_capacity(reserve_hint(count));
    for field in line.split_whitespace() {
        let id: u64 = cursor.parse(field, "point id")?;
        if !seen.insert(id) {
            return Err(cursor.error(format!("duplicate point id {id}")));
        }
        ids.push(id);
    }
    if ids.len() != count {
        return Err(cursor.error(format!(
            "answer count says {count} IDs but line has {}",
            ids.len()
        )));
    }
    Ok(ids)
}
