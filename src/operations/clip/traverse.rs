use crate::error::{Result, TopologyError};
use crate::math::Point2;
use crate::topology::{Contour, VertexId};

use super::select::TraversalRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Subject,
    Clip,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::Subject => Self::Clip,
            Self::Clip => Self::Subject,
        }
    }
}

/// Walks the classified contours and returns one closed ring per start crossing.
///
/// Each ring begins at an unvisited subject crossing carrying `rule.start`.
/// The subject is walked forward, the clip in the direction the rule gives,
/// and the walk switches contours at every crossing it reaches.
///
/// # Errors
///
/// Returns `TopologyError::InvalidTopology` if a walk fails to come back to
/// its start vertex.
pub(super) fn extract_rings(
    subject: &mut Contour,
    clip: &mut Contour,
    rule: TraversalRule,
) -> Result<Vec<Vec<Point2>>> {
    let mut rings = Vec::new();
    while let Some(start) = next_start(subject, rule)? {
        rings.push(walk_ring(subject, clip, start, rule)?);
    }
    Ok(rings)
}

fn next_start(subject: &Contour, rule: TraversalRule) -> Result<Option<VertexId>> {
    for id in subject.ids() {
        let v = subject.vertex(id)?;
        if v.is_intersection && !v.visited && v.classification == rule.start {
            return Ok(Some(id));
        }
    }
    Ok(None)
}

/// Marks a crossing and its twin as visited; returns the twin.
fn consume(
    side: Side,
    id: VertexId,
    subject: &mut Contour,
    clip: &mut Contour,
) -> std::result::Result<VertexId, TopologyError> {
    let (here, there) = match side {
        Side::Subject => (subject, clip),
        Side::Clip => (clip, subject),
    };
    let v = here.vertex_mut(id)?;
    v.visited = true;
    let twin = v
        .twin
        .ok_or_else(|| TopologyError::InvalidTopology("intersection without twin".into()))?;
    there.vertex_mut(twin)?.visited = true;
    Ok(twin)
}

fn walk_ring(
    subject: &mut Contour,
    clip: &mut Contour,
    start: VertexId,
    rule: TraversalRule,
) -> Result<Vec<Point2>> {
    // A ring visits each vertex of either contour at most once.
    let budget = subject.len() + clip.len();

    let mut ring = vec![subject.position_of(start)?];
    consume(Side::Subject, start, subject, clip)?;
    let mut side = Side::Subject;
    let mut current = start;

    for _ in 0..budget {
        current = match side {
            Side::Subject => subject.next(current)?,
            Side::Clip if rule.clip_forward => clip.next(current)?,
            Side::Clip => clip.prev(current)?,
        };
        if side == Side::Subject && current == start {
            return Ok(ring);
        }

        let v = match side {
            Side::Subject => subject.vertex(current)?,
            Side::Clip => clip.vertex(current)?,
        };
        // Arriving at the start's twin closes the ring as well.
        if side == Side::Clip && v.is_intersection && v.twin == Some(start) {
            return Ok(ring);
        }
        let is_intersection = v.is_intersection;
        ring.push(v.point);
        if is_intersection {
            current = consume(side, current, subject, clip)?;
            side = side.other();
        }
    }

    Err(TopologyError::InvalidTopology("ring traversal did not return to its start".into()).into())
}
