//! Ground-truth oracle: brute-force evaluation of every query circle
//! against every point.
//!
//! This is the reference answer an indexed engine is checked against, so
//! it deliberately has no spatial acceleration: exactness is the whole
//! job, and O(Q·N) over in-memory batches is acceptable for benchmark
//! sized inputs.

use crate::geom::{Circle, Point};
use std::collections::BTreeMap;

/// Query index (1-based) → IDs of the points contained in that query's
/// circle, in dataset scan order.
pub type TruthSet = BTreeMap<usize, Vec<u64>>;

/// Compute the exact answer set for every query.
///
/// Covers every query index `1..=circles.len()` exactly once; a query
/// containing no points still gets an entry with an empty ID list.
pub fn compute_truth(points: &[Point], circles: &[Circle]) -> TruthSet {
    let mut truth = TruthSet::new();
    for (i, circle) in circles.iter().enumerate() {
        let ids: Vec<u64> = points
            .iter()
            .filter(|p| circle.contains(p))
            .map(|p| p.id)
            .collect();
        truth.insert(i + 1, ids);
    }
    log::info!(
        "Computed ground truth for {} queries over {} points",
        circles.len(),
        points.len()
    );
    truth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(id: u64, x: i64, y: i64) -> Point {
        Point { id, x, y }
    }

    #[test]
    fn test_boundary_point_included() {
        // {1:(0,0), 2:(5,0), 3:(20,20)} with RangeQuery 0 0 5:
        // point 2 sits exactly on the boundary and must be included.
        let points = vec![pt(1, 0, 0), pt(2, 5, 0), pt(3, 20, 20)];
        let circles = vec![Circle::new(0.0, 0.0, 5.0)];
        let truth = compute_truth(&points, &circles);
        assert_eq!(truth[&1], vec![1, 2]);
    }

    #[test]
    fn test_covers_every_index_in_order() {
        let points = vec![pt(1, 0, 0)];
        let circles = vec![
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(50.0, 50.0, 1.0),
            Circle::new(0.0, 0.0, 100.0),
        ];
        let truth = compute_truth(&points, &circles);
        let keys: Vec<_> = truth.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(truth[&1], vec![1]);
        assert_eq!(truth[&2], Vec::<u64>::new());
        assert_eq!(truth[&3], vec![1]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_truth(&[], &[]).is_empty());

        let truth = compute_truth(&[], &[Circle::new(0.0, 0.0, 10.0)]);
        assert_eq!(truth.len(), 1);
        assert!(truth[&1].is_empty());
    }

    #[test]
    fn test_ids_in_scan_order() {
        // Scan order follows the point sequence, not ID order.
        let points = vec![pt(9, 1, 0), pt(2, 0, 1), pt(5, 0, 0)];
        let circles = vec![Circle::new(0.0, 0.0, 2.0)];
        let truth = compute_truth(&points, &circles);
        assert_eq!(truth[&1], vec![9, 2, 5]);
    }
}
