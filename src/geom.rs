//! Core geometry: points, query circles, and the containment predicate.

/// A dataset point. IDs are positive and assumed unique across all
/// concatenated dataset files; coordinates are integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub id: u64,
    pub x: i64,
    pub y: i64,
}

/// A circular range query (closed disk, boundary inclusive).
///
/// Centers and radii are read as reals, but the common case in generated
/// workloads is integral values, and those take an exact arithmetic path
/// in [`Circle::contains`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Circle { cx, cy, radius }
    }

    /// True iff `p` lies inside or on the boundary of the circle:
    /// `(p.x-cx)^2 + (p.y-cy)^2 <= radius^2`.
    ///
    /// When center and radius are all integral the test runs in `i128`,
    /// so a point at exactly `distance == radius` is always classified as
    /// contained, with no floating-point drift at the boundary.
    pub fn contains(&self, p: &Point) -> bool {
        if let Some((cx, cy, r)) = self.as_integral() {
            if r < 0 {
                return false;
            }
            // Coordinate deltas can span the full i64 range (~2^64), so
            // squaring them blindly would overflow even i128. Any delta
            // exceeding the radius already decides the answer; past that
            // check, the squares fit comfortably in u128.
            let dx = ((p.x as i128) - (cx as i128)).unsigned_abs();
            let dy = ((p.y as i128) - (cy as i128)).unsigned_abs();
            let r = r as u128;
            if dx > r || dy > r {
                return false;
            }
            return dx * dx + dy * dy <= r * r;
        }
        let dx = p.x as f64 - self.cx;
        let dy = p.y as f64 - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// The circle's parameters as integers, if all three are exactly
    /// representable as i64.
    fn as_integral(&self) -> Option<(i64, i64, i64)> {
        Some((
            exact_i64(self.cx)?,
            exact_i64(self.cy)?,
            exact_i64(self.radius)?,
        ))
    }
}

fn exact_i64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
