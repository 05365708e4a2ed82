//! Line-oriented readers and writers for the four harness file formats:
//! dataset, query, truth, and engine result files.
//!
//! All formats share the same shape: a count header followed by
//! whitespace-separated records. Any malformed line is a fatal parse
//! error carrying file and line context; there is no best-effort mode.

pub mod dataset;
pub mod query;
pub mod results;
pub mod truth;

pub use dataset::{read_datasets, read_points, write_points};
pub use query::{read_circles, write_circles};
pub use results::{read_results, ResultEntry, ResultSet};
pub use truth::{read_truth, write_truth};

use crate::error::{RangebenchError, Result};
use std::path::Path;
use std::str::FromStr;

/// Pre-allocation cap for header-declared record counts. The header is
/// untrusted input: a bogus count must surface as a parse error on the
/// missing records, not abort inside the allocator first.
pub(crate) fn reserve_hint(n: usize) -> usize {
    n.min(1 << 20)
}

/// Cursor over the lines of a loaded file, tracking position for error messages.
pub(crate) struct LineCursor<'a> {
    path: &'a Path,
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(path: &'a Path, text: &'a str) -> Self {
        LineCursor {
            path,
            lines: text.lines(),
            line_no: 0,
        }
    }

    /// Next line, or a parse error if the file ended early.
    pub(crate) fn next_line(&mut self) -> Result<&'a str> {
        self.line_no += 1;
        self.lines
            .next()
            .ok_or_else(|| self.error("unexpected end of file"))
    }

    /// Next line if one remains.
    pub(crate) fn try_next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line)
    }

    pub(crate) fn error(&self, msg: impl std::fmt::Display) -> RangebenchError {
        RangebenchError::Parse(format!(
            "{}:{}: {}",
            self.path.display(),
            self.line_no,
            msg
        ))
    }

    /// Parse the count header (line 1 of every format).
    pub(crate) fn read_count(&mut self) -> Result<usize> {
        let line = self.next_line()?;
        line.trim()
            .parse()
            .map_err(|_| self.error(format!("expected record count, got {:?}", line.trim())))
    }

    /// Split a line into exactly `n` whitespace-separated fields.
    pub(crate) fn fields<const N: usize>(&self, line: &'a str) -> Result<[&'a str; N]> {
        let mut out = [""; N];
        let mut it = line.split_whitespace();
        for slot in out.iter_mut() {
            *slot = it
                .next()
                .ok_or_else(|| self.error(format!("expected {N} fields, got fewer")))?;
        }
        if it.next().is_some() {
            return Err(self.error(format!("expected {N} fields, got more")));
        }
        Ok(out)
    }

    /// Parse one numeric field, with the field name in the error message.
    pub(crate) fn parse<T: FromStr>(&self, field: &str, name: &str) -> Result<T> {
        field
            .parse()
            .map_err(|_| self.error(format!("invalid {name}: {field:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cursor_reports_position() {
        let path = PathBuf::from("data.txt");
        let mut cursor = LineCursor::new(&path, "2\n1 2 3\n");
        assert_eq!(cursor.read_count().unwrap(), 2);
        cursor.next_line().unwrap();
        let err = cursor.next_line().unwrap_err();
        assert!(err.to_string().contains("data.txt:3"));
        assert!(err.to_string().contains("unexpected end of file"));
    }

    #[test]
    fn test_fields_rejects_wrong_count() {
        let path = PathBuf::from("q.txt");
        let cursor = LineCursor::new(&path, "");
        assert!(cursor.fields::<3>("1 2").is_err());
        assert!(cursor.fields::<3>("1 2 3 4").is_err());
        assert_eq!(cursor.fields::<3>("1 2 3").unwrap(), ["1", "2", "3"]);
    }

    #[test]
    fn test_bad_header() {
        let path = PathBuf::from("q.txt");
        let mut cursor = LineCursor::new(&path, "abc\n");
        assert!(cursor.read_count().is_err());
    }
}
