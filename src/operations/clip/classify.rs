use tracing::{debug, warn};

use crate::error::{ClipError, Result, TopologyError};
use crate::math::intersect_2d::point_at;
use crate::math::polygon_2d::point_in_polygon;
use crate::topology::{Classification, Contour};

/// Labels every subject crossing as entry or exit with respect to the clip,
/// and gives its twin the complementary label.
///
/// The probe point is the midpoint between the crossing and its successor on
/// the augmented subject contour, which cannot lie on the clip boundary.
///
/// # Errors
///
/// Returns `ClipError::ClassificationInconsistency` if `check_alternation`
/// is set and the labels do not alternate along the subject.
pub(super) fn classify_intersections(
    subject: &mut Contour,
    clip: &mut Contour,
    check_alternation: bool,
) -> Result<Vec<Classification>> {
    let clip_ring = clip.points();
    let mut labels = Vec::new();

    for id in subject.ids() {
        let v = subject.vertex(id)?;
        if !v.is_intersection {
            continue;
        }
        let here = v.point;
        let twin = v
            .twin
            .ok_or_else(|| TopologyError::InvalidTopology("intersection without twin".into()))?;
        let ahead = subject.position_of(subject.next(id)?)?;
        let probe = point_at(&here, &(ahead - here), 0.5);

        let label = if point_in_polygon(&probe, &clip_ring) {
            Classification::Entry
        } else {
            Classification::Exit
        };
        subject.vertex_mut(id)?.classification = label;
        clip.vertex_mut(twin)?.classification = label.complement();
        labels.push(label);
    }

    let entries = labels
        .iter()
        .filter(|&&l| l == Classification::Entry)
        .count();
    debug!(entries, exits = labels.len() - entries, "classified crossings");

    if check_alternation {
        check_alternating(&labels)?;
    }
    Ok(labels)
}

/// Checks that labels strictly alternate around the closed subject contour.
///
/// # Errors
///
/// Returns `ClipError::ClassificationInconsistency` at the first repeat.
pub(super) fn check_alternating(labels: &[Classification]) -> Result<()> {
    let n = labels.len();
    if n % 2 == 1 {
        warn!(crossings = n, "odd number of crossings");
        return Err(ClipError::ClassificationInconsistency(format!(
            "odd number of crossings ({n})"
        ))
        .into());
    }
    for i in 0..n {
        let j = (i + 1) % n;
        if labels[i] == labels[j] {
            warn!(index = i, label = ?labels[i], "labels do not alternate");
            return Err(ClipError::ClassificationInconsistency(format!(
                "crossings {i} and {j} are both {:?}",
                labels[i]
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyclipError;
    use crate::math::{Point2, TOLERANCE};
    use crate::operations::clip::intersect::{find_intersections, insert_intersections};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn augmented(subject: &[Point2], clip: &[Point2]) -> (Contour, Contour) {
        let records = find_intersections(subject, clip, TOLERANCE).unwrap();
        let mut s = Contour::build(subject).unwrap();
        let mut c = Contour::build(clip).unwrap();
        insert_intersections(&mut s, &mut c, &records).unwrap();
        (s, c)
    }

    #[test]
    fn shifted_squares_entry_then_exit() {
        let subject = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let clip = vec![p(0.5, 0.5), p(1.5, 0.5), p(1.5, 1.5), p(0.5, 1.5)];
        let (mut s, mut c) = augmented(&subject, &clip);
        let labels = classify_intersections(&mut s, &mut c, true).unwrap();
        // (1, 0.5) on the right edge comes first along the subject.
        assert_eq!(labels, vec![Classification::Entry, Classification::Exit]);

        for id in s.ids() {
            let v = s.vertex(id).unwrap();
            if let Some(twin) = v.twin {
                let other = c.vertex(twin).unwrap();
                assert_eq!(other.classification, v.classification.complement());
            }
        }
    }

    #[test]
    fn comb_labels_alternate() {
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
        let (mut s, mut c) = augmented(&subject, &clip);
        let labels = classify_intersections(&mut s, &mut c, true).unwrap();
        assert_eq!(
            labels,
            vec![
                Classification::Entry,
                Classification::Exit,
                Classification::Entry,
                Classification::Exit,
            ]
        );
    }

    #[test]
    fn repeated_label_is_an_inconsistency() {
        let labels = [
            Classification::Entry,
            Classification::Entry,
            Classification::Exit,
            Classification::Exit,
        ];
        let err = check_alternating(&labels).unwrap_err();
        assert!(matches!(
            err,
            PolyclipError::Clip(ClipError::ClassificationInconsistency(_))
        ));
    }

    #[test]
    fn odd_count_is_an_inconsistency() {
        let labels = [Classification::Entry];
        assert!(check_alternating(&labels).is_err());
    }

    #[test]
    fn empty_labels_are_consistent() {
        check_alternating(&[]).unwrap();
    }
}
