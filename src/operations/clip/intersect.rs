use tracing::{trace, warn};

use crate::error::{ClipError, Result, TopologyError};
use crate::math::intersect_2d::{edges_overlap, endpoint_contact, interior_crossing};
use crate::math::Point2;
use crate::topology::{link_twins, Contour, VertexData, VertexId};

/// One crossing between a subject edge and a clip edge.
///
/// Edges are named by the index of their start point in the input slice.
#[derive(Debug, Clone, Copy)]
pub(super) struct InterRecord {
    pub subject_edge: usize,
    pub clip_edge: usize,
    pub t_subject: f64,
    pub t_clip: f64,
    pub point: Point2,
}

fn edge(points: &[Point2], i: usize) -> (&Point2, &Point2) {
    (&points[i], &points[(i + 1) % points.len()])
}

/// Tests every subject edge against every clip edge.
///
/// # Errors
///
/// Returns `ClipError::ClassificationInconsistency` if the boundaries meet at
/// a vertex of either polygon, since such a contact cannot be labelled entry
/// or exit.
pub(super) fn find_intersections(
    subject: &[Point2],
    clip: &[Point2],
    eps: f64,
) -> Result<Vec<InterRecord>> {
    let mut records = Vec::new();
    for si in 0..subject.len() {
        let (s0, s1) = edge(subject, si);
        for ci in 0..clip.len() {
            let (c0, c1) = edge(clip, ci);
            if let Some((point, t_subject, t_clip)) = interior_crossing(s0, s1, c0, c1, eps) {
                trace!(si, ci, t_subject, t_clip, "edge crossing");
                records.push(InterRecord {
                    subject_edge: si,
                    clip_edge: ci,
                    t_subject,
                    t_clip,
                    point,
                });
            } else if endpoint_contact(s0, s1, c0, c1, eps) {
                warn!(si, ci, "boundaries meet at a vertex");
                return Err(ClipError::ClassificationInconsistency(format!(
                    "subject edge {si} and clip edge {ci} meet at a vertex"
                ))
                .into());
            }
        }
    }
    Ok(records)
}

/// Rejects inputs where a subject edge lies along a clip edge.
///
/// # Errors
///
/// Returns `ClipError::InvalidPolygon` naming the first overlapping edge pair.
pub(super) fn reject_shared_edges(subject: &[Point2], clip: &[Point2], eps: f64) -> Result<()> {
    for si in 0..subject.len() {
        let (s0, s1) = edge(subject, si);
        for ci in 0..clip.len() {
            let (c0, c1) = edge(clip, ci);
            if edges_overlap(s0, s1, c0, c1, eps) {
                return Err(ClipError::InvalidPolygon(format!(
                    "subject edge {si} overlaps clip edge {ci}"
                ))
                .into());
            }
        }
    }
    Ok(())
}

/// Inserts one vertex per record into `contour`, ordered along each edge by
/// the parameter `key` returns. Returns the new handles indexed like `records`.
fn insert_sorted(
    contour: &mut Contour,
    edge_starts: &[VertexId],
    records: &[InterRecord],
    key: impl Fn(&InterRecord) -> (usize, f64),
) -> std::result::Result<Vec<VertexId>, TopologyError> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| {
        let (ea, ta) = key(&records[a]);
        let (eb, tb) = key(&records[b]);
        ea.cmp(&eb).then(ta.total_cmp(&tb))
    });

    let mut inserted = vec![VertexId::default(); records.len()];
    let mut last: Option<(usize, VertexId)> = None;
    for i in order {
        let (edge, _) = key(&records[i]);
        let after = match last {
            Some((last_edge, id)) if last_edge == edge => id,
            _ => edge_starts[edge],
        };
        let id = contour.insert_after(after, VertexData::intersection(records[i].point))?;
        inserted[i] = id;
        last = Some((edge, id));
    }
    Ok(inserted)
}

/// Inserts all crossings into both contours and links them as twins.
///
/// Both contours must still hold only their original vertices, in input order.
///
/// # Errors
///
/// Returns an error if the contours do not match the edge indices in `records`.
pub(super) fn insert_intersections(
    subject: &mut Contour,
    clip: &mut Contour,
    records: &[InterRecord],
) -> Result<()> {
    let subject_edges = subject.ids();
    let clip_edges = clip.ids();

    let subject_ids = insert_sorted(subject, &subject_edges, records, |r| {
        (r.subject_edge, r.t_subject)
    })?;
    let clip_ids = insert_sorted(clip, &clip_edges, records, |r| (r.clip_edge, r.t_clip))?;

    for (&s, &c) in subject_ids.iter().zip(&clip_ids) {
        link_twins(subject, s, clip, c)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyclipError;
    use crate::math::TOLERANCE;
    use crate::topology::check_twins;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn shifted_squares_cross_twice() {
        let clip = vec![p(0.5, 0.5), p(1.5, 0.5), p(1.5, 1.5), p(0.5, 1.5)];
        let records = find_intersections(&unit_square(), &clip, TOLERANCE).unwrap();
        assert_eq!(records.len(), 2);

        // Right edge (1) and top edge (2) of the subject.
        let mut edges: Vec<usize> = records.iter().map(|r| r.subject_edge).collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![1, 2]);
        for r in &records {
            assert!((r.t_subject - 0.5).abs() < TOLERANCE);
            assert!((r.t_clip - 0.5).abs() < TOLERANCE);
        }
    }

    #[test]
    fn shared_corner_is_an_inconsistency() {
        let clip = vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)];
        let err = find_intersections(&unit_square(), &clip, TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            PolyclipError::Clip(ClipError::ClassificationInconsistency(_))
        ));
    }

    #[test]
    fn clip_vertex_on_subject_edge_is_an_inconsistency() {
        let subject = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let clip = vec![p(2.0, 1.0), p(6.0, 1.0), p(4.0, 3.0)];
        assert!(find_intersections(&subject, &clip, TOLERANCE).is_err());
    }

    #[test]
    fn shared_edge_is_rejected() {
        let clip = vec![p(1.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(1.0, 1.0)];
        assert!(reject_shared_edges(&unit_square(), &clip, TOLERANCE).is_err());

        let apart = vec![p(3.0, 0.0), p(4.0, 0.0), p(4.0, 1.0), p(3.0, 1.0)];
        assert!(reject_shared_edges(&unit_square(), &apart, TOLERANCE).is_ok());
    }

    #[test]
    fn crossings_on_one_edge_are_ordered_by_parameter() {
        // A comb whose teeth cross the subject's bottom edge four times.
        let subject = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 5.0), p(0.0, 5.0)];
        let clip = vec![
            p(1.0, -1.0),
            p(2.0, -1.0),
            p(2.0, 1.0),
            p(7.0, 1.0),
            p(7.0, -1.0),
            p(8.0, -1.0),
            p(8.0, 2.0),
            p(1.0, 2.0),
        ];
        let records = find_intersections(&subject, &clip, TOLERANCE).unwrap();
        assert_eq!(records.len(), 4);

        let mut s = Contour::build(&subject).unwrap();
        let mut c = Contour::build(&clip).unwrap();
        insert_intersections(&mut s, &mut c, &records).unwrap();
        check_twins(&s, &c).unwrap();
        check_twins(&c, &s).unwrap();

        assert_eq!(s.intersection_count(), 4);
        assert_eq!(c.intersection_count(), 4);

        let xs: Vec<f64> = s.points().iter().take(6).map(|pt| pt.x).collect();
        let expected = [0.0, 1.0, 2.0, 7.0, 8.0, 10.0];
        for (x, e) in xs.iter().zip(expected) {
            assert!((x - e).abs() < 1e-9, "xs={xs:?}");
        }
    }

    #[test]
    fn twins_share_position() {
        let clip = vec![p(0.5, 0.5), p(1.5, 0.5), p(1.5, 1.5), p(0.5, 1.5)];
        let subject = unit_square();
        let records = find_intersections(&subject, &clip, TOLERANCE).unwrap();
        let mut s = Contour::build(&subject).unwrap();
        let mut c = Contour::build(&clip).unwrap();
        insert_intersections(&mut s, &mut c, &records).unwrap();

        for id in s.ids() {
            let v = s.vertex(id).unwrap();
            if let Some(twin) = v.twin {
                let other = c.vertex(twin).unwrap();
                assert!((v.point - other.point).norm() < TOLERANCE);
                assert_eq!(other.twin, Some(id));
            }
        }
    }
}
