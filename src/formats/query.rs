//! Query file format: line 1 is the query count `Q`, followed by `Q`
//! lines of `RangeQuery cx cy radius`.

use crate::error::{RangebenchError, Result};
use crate::formats::{reserve_hint, LineCursor};
use crate::geom::Circle;
use std::io::Write;
use std::path::Path;

const QUERY_TAG: &str = "RangeQuery";

/// Read a query file. The leading tag on each line must be `RangeQuery`
/// and the radius must be non-negative.
pub fn read_circles(path: &Path) -> Result<Vec<Circle>> {
    let text = std::fs::read_to_string(path)?;
    let mut cursor = LineCursor::new(path, &text);

    let q = cursor.read_count()?;
    let mut circles = Vec::with_capacity(reserve_hint(q));
    for _ in 0..q {
        let line = cursor.next_line()?;
        let [tag, cx, cy, radius] = cursor.fields(line)?;
        if tag != QUERY_TAG {
            return Err(cursor.error(format!("unknown query tag {tag:?}, expected {QUERY_TAG:?}")));
        }
        let radius: f64 = cursor.parse(radius, "radius")?;
        if !(radius >= 0.0) {
            return Err(cursor.error(format!("radius must be non-negative, got {radius}")));
        }
        circles.push(Circle {
            cx: cursor.parse(cx, "center x")?,
            cy: cursor.parse(cy, "center y")?,
            radius,
        });
    }
    Ok(circles)
}

/// Write a query file in the declared format.
pub fn write_circles(path: &Path, circles: &[Circle]) -> Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{}", circles.len()).map_err(RangebenchError::Io)?;
    for c in circles {
        writeln!(
            out,
            "{} {} {} {}",
            QUERY_TAG,
            fmt_num(c.cx),
            fmt_num(c.cy),
            fmt_num(c.radius)
        )
        .map_err(RangebenchError::Io)?;
    }
    out.flush().map_err(RangebenchError::Io)?;
    Ok(())
}

/// Integral values are written without a decimal part so generated files
/// stay byte-compatible with integer-only consumers.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        let circles = vec![
            Circle::new(0.0, 0.0, 5.0),
            Circle::new(-10.0, 20.0, 2.5),
        ];
        write_circles(&path, &circles).unwrap();
        assert_eq!(read_circles(&path).unwrap(), circles);
    }

    #[test]
    fn test_integral_values_written_as_integers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        write_circles(&path, &[Circle::new(3.0, -4.0, 10.0)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1\nRangeQuery 3 -4 10\n");
    }

    #[test]
    fn test_accepts_real_coordinates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        std::fs::write(&path, "1\nRangeQuery 1.5 -2.25 3.75\n").unwrap();
        let circles = read_circles(&path).unwrap();
        assert_eq!(circles[0], Circle::new(1.5, -2.25, 3.75));
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        std::fs::write(&path, "1\nKnnQuery 0 0 5\n").unwrap();
        let err = read_circles(&path).unwrap_err();
        assert!(err.to_string().contains("KnnQuery"));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        std::fs::write(&path, "1\nRangeQuery 0 0 -5\n").unwrap();
        assert!(read_circles(&path).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        std::fs::write(&path, "1\nRangeQuery 0 0\n").unwrap();
        assert!(read_circles(&path).is_err());
    }
}
