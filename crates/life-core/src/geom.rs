//! Geometry primitives: [`Point`] and the toroidal wrap helper.
//!
//! Coordinates follow the grid's row-major layout: `y` is the row and grows
//! down, `x` is the column and grows right.

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. Not restricted to any grid's bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Moore-neighborhood offsets as `(dy, dx)`, in the order the neighbor sum
/// walks them.
pub const MOORE: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy). Callers keep the point small
    /// (wrapped) so the addition cannot overflow.
    #[inline]
    pub const fn shift(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Reduce the point onto a `rows × cols` torus.
    ///
    /// Uses a Euclidean remainder, so `-1` lands on the last row/column
    /// rather than on a negative index. Both dimensions must be non-zero.
    #[inline]
    pub fn wrap(self, rows: usize, cols: usize) -> Self {
        Self {
            x: self.x.rem_euclid(cols as i64),
            y: self.y.rem_euclid(rows as i64),
        }
    }

    /// The eight Moore neighbours, in [`MOORE`] order. Not wrapped.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        MOORE.map(|(dy, dx)| self.shift(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_negative_goes_to_far_edge() {
        let p = Point::new(-1, -1).wrap(4, 6);
        assert_eq!(p, Point::new(5, 3));
    }

    #[test]
    fn wrap_large_values() {
        assert_eq!(Point::new(13, 9).wrap(4, 6), Point::new(1, 1));
        assert_eq!(Point::new(-13, -9).wrap(4, 6), Point::new(5, 3));
    }

    #[test]
    fn wrap_in_range_is_identity() {
        let p = Point::new(2, 3);
        assert_eq!(p.wrap(4, 6), p);
    }

    #[test]
    fn neighbors_are_distinct_and_exclude_self() {
        let p = Point::new(5, 5);
        let n = p.neighbors_8();
        assert!(!n.contains(&p));
        for (i, a) in n.iter().enumerate() {
            for b in &n[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
