//! Dataset file format: line 1 is the point count `N`, followed by `N`
//! lines of `id x y` (all integers).

use crate::error::{RangebenchError, Result};
use crate::formats::{reserve_hint, LineCursor};
use crate::geom::Point;
use std::io::Write;
use std::path::Path;

/// Read one dataset file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    let mut cursor = LineCursor::new(path, &text);

    let n = cursor.read_count()?;
    let mut points = Vec::with_capacity(reserve_hint(n));
    for _ in 0..n {
        let line = cursor.next_line()?;
        let [id, x, y] = cursor.fields(line)?;
        let id: u64 = cursor.parse(id, "point id")?;
        if id == 0 {
            return Err(cursor.error("point id must be positive"));
        }
        points.push(Point {
            id,
            x: cursor.parse(x, "x coordinate")?,
            y: cursor.parse(y, "y coordinate")?,
        });
    }
    Ok(points)
}

/// Read and concatenate several dataset files into one point sequence.
///
/// IDs are assumed unique across files; collisions are not detected
/// (matching the upstream generator contract, which assigns disjoint ID
/// ranges per file).
pub fn read_datasets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let loaded = read_points(path)?;
        log::debug!("Loaded {} points from {}", loaded.len(), path.display());
        points.extend(loaded);
    }
    if points.is_empty() {
        log::warn!("Dataset is empty; every query will have an empty answer set");
    }
    Ok(points)
}

/// Write a dataset file in the declared format.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{}", points.len()).map_err(RangebenchError::Io)?;
    for p in points {
        writeln!(out, "{} {} {}", p.id, p.x, p.y).map_err(RangebenchError::Io)?;
    }
    out.flush().map_err(RangebenchError::Io)?;
    Ok(())
}
