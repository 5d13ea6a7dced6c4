//! Geometry helpers used by line fitting and intersection detection.
//!
//! Degenerate inputs (zero-length lines, parallel pairs) are reported as
//! `None` rather than producing non-finite values.

use super::point::Point2D;
use super::scalar::Scalar;

/// Perpendicular distance from `p0` to the infinite line through `p1` and `p2`.
///
/// ```text
/// |(y2 - y1)·x0 - (x2 - x1)·y0 + x2·y1 - y2·x1| / ‖p2 - p1‖
/// ```
///
/// Returns `None` when `p1` and `p2` coincide.
#[inline]
pub fn perpendicular_distance<T: Scalar>(
    p1: Point2D<T>,
    p2: Point2D<T>,
    p0: Point2D<T>,
) -> Option<T> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let den = (dx * dx + dy * dy).sqrt();
    if den <= T::EPSILON {
        return None;
    }
    let num = (dy * p0.x - dx * p0.y + p2.x * p1.y - p2.y * p1.x).abs();
    Some(num / den)
}

/// Intersection of the infinite lines through `(a1, a2)` and `(b1, b2)`.
///
/// Each line is written in implicit form `a·x + b·y = c`, so vertical lines
/// need no special handling. The pair is rejected when the sine of the angle
/// between the two directions is below `tolerance`, or when either line is
/// zero-length.
pub fn line_intersection<T: Scalar>(
    a1: Point2D<T>,
    a2: Point2D<T>,
    b1: Point2D<T>,
    b2: Point2D<T>,
    tolerance: T,
) -> Option<Point2D<T>> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let len1 = d1.length();
    let len2 = d2.length();
    if len1 <= T::EPSILON || len2 <= T::EPSILON {
        return None;
    }

    // a = dy, b = -dx, c = a·x1 + b·y1
    let (ka, kb) = (d1.y, -d1.x);
    let kc = ka * a1.x + kb * a1.y;
    let (la, lb) = (d2.y, -d2.x);
    let lc = la * b1.x + lb * b1.y;

    let det = ka * lb - la * kb;
    if (det / (len1 * len2)).abs() < tolerance {
        return None;
    }

    let x = (kc * lb - lc * kb) / det;
    let y = (ka * lc - la * kc) / det;
    Some(Point2D::new(x, y))
}

/// True if `p` lies strictly inside the bounding box of `start`-`end`
/// grown by `margin` on every side.
#[inline]
pub fn within_expanded_bounds<T: Scalar>(
    p: Point2D<T>,
    start: Point2D<T>,
    end: Point2D<T>,
    margin: T,
) -> bool {
    p.x > start.x.min(end.x) - margin
        && p.x < start.x.max(end.x) + margin
        && p.y > start.y.min(end.y) - margin
        && p.y < start.y.max(end.y) + margin
}

/// Index of the point in `points` closest to `target`, with its distance.
///
/// The first of equally distant points wins. Returns `None` for an empty slice.
pub fn nearest_point<T: Scalar>(points: &[Point2D<T>], target: Point2D<T>) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = target.distance_squared(*p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, d)| (i, d.sqrt()))
}
