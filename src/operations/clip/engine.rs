use tracing::debug;

use crate::error::{ClipError, Result};
use crate::math::polygon_2d::{bounding_rect, is_ccw, point_in_polygon, rects_overlap};
use crate::math::Point2;
use crate::topology::{check_twins, Contour};

use super::classify::classify_intersections;
use super::intersect::{find_intersections, insert_intersections, reject_shared_edges};
use super::select::{select_without_crossings, BooleanOp, Containment, Selection};
use super::traverse::extract_rings;
use super::ClipOptions;

/// The two augmented contours of one clip run.
///
/// Building the graph validates the inputs and runs the intersection phase;
/// [`classify`](Self::classify) and [`extract`](Self::extract) run the rest.
/// Callers that need a deadline can check it between these steps.
#[derive(Debug, Clone)]
pub struct ClipGraph {
    subject_points: Vec<Point2>,
    clip_points: Vec<Point2>,
    subject: Contour,
    clip: Contour,
    crossings: usize,
    classified: bool,
    options: ClipOptions,
}

impl ClipGraph {
    /// Validates both polygons, builds their contours and inserts all crossings.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::InvalidPolygon` if either polygon has fewer than
    /// 3 points or a non-finite coordinate, or if an edge of one lies along an
    /// edge of the other. Returns `ClipError::ClassificationInconsistency` if
    /// the boundaries meet at a vertex.
    pub fn build(subject: &[Point2], clip: &[Point2], options: ClipOptions) -> Result<Self> {
        validate_polygon("subject", subject)?;
        validate_polygon("clip", clip)?;

        let subject_points = oriented(subject, options.orient_inputs);
        let clip_points = oriented(clip, options.orient_inputs);
        reject_shared_edges(&subject_points, &clip_points, options.epsilon)?;

        let mut subject = Contour::build(&subject_points)?;
        let mut clip = Contour::build(&clip_points)?;

        let records = match (bounding_rect(&subject_points), bounding_rect(&clip_points)) {
            (Some(a), Some(b)) if rects_overlap(&a, &b, options.epsilon) => {
                find_intersections(&subject_points, &clip_points, options.epsilon)?
            }
            _ => Vec::new(),
        };
        debug!(
            subject_vertices = subject_points.len(),
            clip_vertices = clip_points.len(),
            crossings = records.len(),
            "intersection phase done"
        );

        insert_intersections(&mut subject, &mut clip, &records)?;
        check_twins(&subject, &clip)?;

        Ok(Self {
            subject_points,
            clip_points,
            subject,
            clip,
            crossings: records.len(),
            classified: false,
            options,
        })
    }

    /// The augmented subject contour.
    #[must_use]
    pub fn subject(&self) -> &Contour {
        &self.subject
    }

    /// The augmented clip contour.
    #[must_use]
    pub fn clip(&self) -> &Contour {
        &self.clip
    }

    /// Number of edge crossings found.
    #[must_use]
    pub fn crossing_count(&self) -> usize {
        self.crossings
    }

    /// Labels every crossing as entry or exit. Runs once; later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::ClassificationInconsistency` if the labels do not
    /// alternate along the subject and the check is enabled.
    pub fn classify(&mut self) -> Result<()> {
        if !self.classified {
            classify_intersections(
                &mut self.subject,
                &mut self.clip,
                self.options.check_alternation,
            )?;
            self.classified = true;
        }
        Ok(())
    }

    /// Extracts the output rings for `op`, consuming the graph.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::HoleInResult` for a subtraction whose result would
    /// need a hole, or any classification or traversal error.
    pub fn extract(mut self, op: BooleanOp) -> Result<Vec<Vec<Point2>>> {
        if self.crossings == 0 {
            return self.without_crossings(op);
        }
        self.classify()?;
        let rings = extract_rings(&mut self.subject, &mut self.clip, op.traversal_rule())?;
        debug!(?op, rings = rings.len(), "traversal done");
        Ok(rings)
    }

    fn without_crossings(self, op: BooleanOp) -> Result<Vec<Vec<Point2>>> {
        let containment = if point_in_polygon(&self.subject_points[0], &self.clip_points) {
            Containment::SubjectInsideClip
        } else if point_in_polygon(&self.clip_points[0], &self.subject_points) {
            Containment::ClipInsideSubject
        } else {
            Containment::Disjoint
        };
        debug!(?op, ?containment, "no crossings");

        match select_without_crossings(op, containment) {
            Selection::Nothing => Ok(Vec::new()),
            Selection::Subject => Ok(vec![self.subject_points]),
            Selection::Clip => Ok(vec![self.clip_points]),
            Selection::Both => Ok(vec![self.subject_points, self.clip_points]),
            Selection::Hole => Err(ClipError::HoleInResult.into()),
        }
    }
}

/// Clips `subject` against `clip` and returns the output rings.
///
/// Both polygons must be simple and wound the same way (counter-clockwise),
/// unless `options.orient_inputs` is set.
///
/// # Errors
///
/// See [`ClipGraph::build`] and [`ClipGraph::extract`].
pub fn clip_polygons(
    subject: &[Point2],
    clip: &[Point2],
    op: BooleanOp,
    options: ClipOptions,
) -> Result<Vec<Vec<Point2>>> {
    ClipGraph::build(subject, clip, options)?.extract(op)
}

fn validate_polygon(role: &str, points: &[Point2]) -> Result<()> {
    if points.len() < 3 {
        return Err(ClipError::InvalidPolygon(format!(
            "{role} polygon needs at least 3 points, got {}",
            points.len()
        ))
        .into());
    }
    if let Some(i) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(ClipError::InvalidPolygon(format!(
            "{role} polygon has a non-finite coordinate at vertex {i}"
        ))
        .into());
    }
    Ok(())
}

fn oriented(points: &[Point2], orient: bool) -> Vec<Point2> {
    let mut owned = points.to_vec();
    if orient && !is_ccw(points) {
        owned.reverse();
    }
    owned
}
