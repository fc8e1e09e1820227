use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Clips 2D segments against a convex polygon (Cyrus-Beck).
///
/// The polygon must be convex and wound counter-clockwise.
#[derive(Debug, Clone)]
pub struct ClipSegmentToConvex {
    vertices: Vec<Point2>,
    /// Inward unit normal of edge `i` (from vertex `i` to `i + 1`).
    normals: Vec<Vector2>,
}

impl ClipSegmentToConvex {
    /// Prepares the clipper, computing one inward normal per edge.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 3 vertices or a
    /// zero-length edge, and `GeometryError::NonFinite` for NaN or infinite
    /// coordinates.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "convex clip polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(GeometryError::NonFinite("convex clip polygon").into());
        }

        let n = vertices.len();
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let edge = vertices[(i + 1) % n] - vertices[i];
            let len = edge.norm();
            if len < TOLERANCE {
                return Err(GeometryError::Degenerate(format!("zero-length edge {i}")).into());
            }
            // Left normal points inward for counter-clockwise winding.
            normals.push(Vector2::new(-edge.y, edge.x) / len);
        }
        Ok(Self { vertices, normals })
    }

    /// Returns the part of `p0 -> p1` inside the polygon, or `None` if the
    /// segment lies entirely outside.
    #[must_use]
    pub fn execute(&self, p0: &Point2, p1: &Point2) -> Option<(Point2, Point2)> {
        let d = p1 - p0;
        let mut t_enter = 0.0_f64;
        let mut t_leave = 1.0_f64;

        for (vertex, normal) in self.vertices.iter().zip(&self.normals) {
            // Signed distance of p0 from the edge line, positive inside.
            let dist = normal.dot(&(p0 - vertex));
            let rate = normal.dot(&d);

            if rate.abs() < TOLERANCE {
                if dist < 0.0 {
                    return None;
                }
                continue;
            }

            let t = -dist / rate;
            if rate > 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_leave = t_leave.min(t);
            }
            if t_enter > t_leave {
                return None;
            }
        }

        Some((p0 + d * t_enter, p0 + d * t_leave))
    }
}
