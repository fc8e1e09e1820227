use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from two corners given in any order.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }
}

/// Clips a 3D segment to an axis-aligned box (Liang-Barsky).
pub struct ClipSegmentToBox {
    bounds: Aabb,
}

impl ClipSegmentToBox {
    /// Creates a new `ClipSegmentToBox` operation.
    #[must_use]
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }

    /// Returns the part of `p0 -> p1` inside the box, or `None` if the segment
    /// misses it entirely.
    ///
    /// Each axis narrows the parameter window `[t0, t1]`, starting from `[0, 1]`.
    /// A segment parallel to a slab is rejected when it starts outside that slab.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn execute(&self, p0: &Point3, p1: &Point3) -> Option<(Point3, Point3)> {
        let d: Vector3 = p1 - p0;
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;

        for axis in 0..3 {
            let lo = self.bounds.min[axis];
            let hi = self.bounds.max[axis];
            let q0 = p0[axis];
            let da = d[axis];

            if da == 0.0 {
                if q0 < lo || q0 > hi {
                    return None;
                }
                continue;
            }

            let t_lo = (lo - q0) / da;
            let t_hi = (hi - q0) / da;
            let (t_enter, t_leave) = if da > 0.0 { (t_lo, t_hi) } else { (t_hi, t_lo) };
            t0 = t0.max(t_enter);
            t1 = t1.min(t_leave);
            if t0 > t1 {
                return None;
            }
        }

        Some((p0 + d * t0, p0 + d * t1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_box() -> ClipSegmentToBox {
        ClipSegmentToBox::new(Aabb::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ))
    }

    #[test]
    fn segment_inside_is_unchanged() {
        let a = Point3::new(0.2, 0.3, 0.4);
        let b = Point3::new(0.8, 0.7, 0.6);
        let (c0, c1) = unit_box().execute(&a, &b).unwrap();
        assert_relative_eq!(c0, a);
        assert_relative_eq!(c1, b);
    }

    #[test]
    fn segment_through_box_is_trimmed_on_both_ends() {
        let (c0, c1) = unit_box()
            .execute(&Point3::new(-1.0, 0.5, 0.5), &Point3::new(2.0, 0.5, 0.5))
            .unwrap();
        assert_relative_eq!(c0, Point3::new(0.0, 0.5, 0.5), epsilon = 1e-12);
        assert_relative_eq!(c1, Point3::new(1.0, 0.5, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn reversed_segment_keeps_its_direction() {
        let (c0, c1) = unit_box()
            .execute(&Point3::new(2.0, 0.5, 0.5), &Point3::new(-1.0, 0.5, 0.5))
            .unwrap();
        assert_relative_eq!(c0.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c1.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_through_corner_region() {
        let (c0, c1) = unit_box()
            .execute(&Point3::new(-0.5, -0.5, 0.5), &Point3::new(1.5, 1.5, 0.5))
            .unwrap();
        assert_relative_eq!(c0, Point3::new(0.0, 0.0, 0.5), epsilon = 1e-12);
        assert_relative_eq!(c1, Point3::new(1.0, 1.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn parallel_outside_slab_is_rejected() {
        let hit = unit_box().execute(&Point3::new(-1.0, 2.0, 0.5), &Point3::new(2.0, 2.0, 0.5));
        assert!(hit.is_none());
    }

    #[test]
    fn segment_missing_the_box_is_rejected() {
        let hit = unit_box().execute(&Point3::new(2.0, 0.0, 0.5), &Point3::new(3.0, 1.0, 0.5));
        assert!(hit.is_none());
    }

    #[test]
    fn aabb_new_sorts_corners() {
        let b = Aabb::new(Point3::new(1.0, -1.0, 3.0), Point3::new(-1.0, 1.0, 2.0));
        assert_relative_eq!(b.min, Point3::new(-1.0, -1.0, 2.0));
        assert_relative_eq!(b.max, Point3::new(1.0, 1.0, 3.0));
    }
}
