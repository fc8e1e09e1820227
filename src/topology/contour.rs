use slotmap::SlotMap;

use crate::error::{self, ClipError, TopologyError};
use crate::math::Point2;

use super::vertex::{VertexData, VertexId};

/// A circular, doubly-linked sequence of vertices describing one polygon boundary.
///
/// Vertices live in an arena and are linked by [`VertexId`], so handles taken
/// before an insertion stay valid after it.
#[derive(Debug, Clone)]
pub struct Contour {
    vertices: SlotMap<VertexId, VertexData>,
    head: VertexId,
}

impl Contour {
    /// Wraps an ordered point list into a contour of plain vertices.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::InvalidPolygon` if fewer than 3 points are given.
    pub fn build(points: &[Point2]) -> error::Result<Self> {
        if points.len() < 3 {
            return Err(ClipError::InvalidPolygon(format!(
                "a contour needs at least 3 points, got {}",
                points.len()
            ))
            .into());
        }

        let mut vertices = SlotMap::with_capacity_and_key(points.len());
        let ids: Vec<VertexId> = points
            .iter()
            .map(|&pt| vertices.insert(VertexData::new(pt)))
            .collect();

        let n = ids.len();
        for (i, &id) in ids.iter().enumerate() {
            let v = &mut vertices[id];
            v.next = ids[(i + 1) % n];
            v.prev = ids[(i + n - 1) % n];
        }

        Ok(Self {
            vertices,
            head: ids[0],
        })
    }

    /// The first original vertex.
    #[must_use]
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Number of vertices, intersections included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a built contour.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this contour.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this contour.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Successor of `id` in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this contour.
    pub fn next(&self, id: VertexId) -> Result<VertexId, TopologyError> {
        Ok(self.vertex(id)?.next)
    }

    /// Predecessor of `id` in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this contour.
    pub fn prev(&self, id: VertexId) -> Result<VertexId, TopologyError> {
        Ok(self.vertex(id)?.prev)
    }

    /// Position of the vertex `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this contour.
    pub fn position_of(&self, id: VertexId) -> Result<Point2, TopologyError> {
        Ok(self.vertex(id)?.point)
    }

    /// Splices `data` in directly after `after` and returns its handle.
    ///
    /// Several vertices on one edge must be inserted in increasing parametric
    /// order, each after the previously inserted one.
    ///
    /// # Errors
    ///
    /// Returns an error if `after` does not belong to this contour.
    pub fn insert_after(
        &mut self,
        after: VertexId,
        mut data: VertexData,
    ) -> Result<VertexId, TopologyError> {
        let next = self.next(after)?;
        data.prev = after;
        data.next = next;
        let id = self.vertices.insert(data);
        self.vertices[after].next = id;
        self.vertices[next].prev = id;
        Ok(id)
    }

    /// Vertex handles in traversal order, starting at the head.
    #[must_use]
    pub fn ids(&self) -> Vec<VertexId> {
        let mut ids = Vec::with_capacity(self.len());
        let mut current = self.head;
        for _ in 0..self.len() {
            ids.push(current);
            current = self.vertices[current].next;
        }
        ids
    }

    /// Vertex positions in traversal order, starting at the head.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.ids()
            .into_iter()
            .map(|id| self.vertices[id].point)
            .collect()
    }

    /// Number of intersection vertices.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.vertices.values().filter(|v| v.is_intersection).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyclipError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn triangle() -> Contour {
        Contour::build(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap()
    }

    #[test]
    fn build_is_circular() {
        let c = triangle();
        let ids = c.ids();
        assert_eq!(ids.len(), 3);
        assert_eq!(c.next(ids[2]).unwrap(), ids[0]);
        assert_eq!(c.prev(ids[0]).unwrap(), ids[2]);
        assert_eq!(c.head(), ids[0]);
        assert_eq!(c.intersection_count(), 0);
    }

    #[test]
    fn build_rejects_two_points() {
        let err = Contour::build(&[p(0.0, 0.0), p(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            PolyclipError::Clip(ClipError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn insert_after_keeps_earlier_handles() {
        let mut c = triangle();
        let ids = c.ids();
        let a = c
            .insert_after(ids[0], VertexData::intersection(p(0.25, 0.0)))
            .unwrap();
        let b = c
            .insert_after(a, VertexData::intersection(p(0.75, 0.0)))
            .unwrap();

        assert_eq!(c.len(), 5);
        assert_eq!(c.next(ids[0]).unwrap(), a);
        assert_eq!(c.next(a).unwrap(), b);
        assert_eq!(c.next(b).unwrap(), ids[1]);
        assert_eq!(c.prev(ids[1]).unwrap(), b);
        assert_eq!(c.position_of(ids[1]).unwrap(), p(1.0, 0.0));
        assert_eq!(c.intersection_count(), 2);

        let xs: Vec<f64> = c.points().iter().map(|pt| pt.x).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.75, 1.0, 0.0]);
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let a = triangle();
        let mut b = triangle();
        let extra = b
            .insert_after(b.head(), VertexData::intersection(p(0.5, 0.0)))
            .unwrap();
        assert!(a.vertex(extra).is_err());
    }
}
