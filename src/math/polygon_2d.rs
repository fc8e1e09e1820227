use std::f64::consts::TAU;

use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise.
#[must_use]
pub fn is_ccw(points: &[Point2]) -> bool {
    signed_area_2d(points) > 0.0
}

/// Even-odd point-in-polygon test.
///
/// Casts a horizontal ray from `pt` towards +x and counts edge crossings.
/// The result for points exactly on the boundary is unspecified.
#[must_use]
pub fn point_in_polygon(pt: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        // Half-open rule: an edge counts only if it straddles the ray's y.
        if (a.y > pt.y) != (b.y > pt.y) {
            let x_cross = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Builds a regular polygon with `sides` vertices in counter-clockwise order.
///
/// `phase` is the angle in radians of the first vertex.
#[must_use]
pub fn regular_polygon(center: Point2, radius: f64, sides: usize, phase: f64) -> Vec<Point2> {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = phase + step * i as f64;
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Axis-aligned bounding rectangle of a point set as `(min, max)`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounding_rect(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Returns `true` if two `(min, max)` rectangles intersect or come within
/// `eps` of touching.
#[must_use]
pub fn rects_overlap(a: &(Point2, Point2), b: &(Point2, Point2), eps: f64) -> bool {
    a.0.x <= b.1.x + eps && b.0.x <= a.1.x + eps && a.0.y <= b.1.y + eps && b.0.y <= a.1.y + eps
}
