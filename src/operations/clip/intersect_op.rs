use crate::error::Result;
use crate::math::Point2;

use super::engine::clip_polygons;
use super::select::BooleanOp;
use super::ClipOptions;

/// Clips the subject polygon to the clip polygon (Weiler-Atherton intersection).
///
/// When the boundaries do not cross, the result is the subject if it lies
/// inside the clip, the clip if it lies inside the subject, and empty if the
/// two are disjoint. A clip nested inside the subject therefore comes back
/// whole even though the subject's first vertex is outside it.
pub struct Intersect {
    subject: Vec<Point2>,
    clip: Vec<Point2>,
    options: ClipOptions,
}

impl Intersect {
    /// Creates a new `Intersect` operation with default options.
    #[must_use]
    pub fn new(subject: Vec<Point2>, clip: Vec<Point2>) -> Self {
        Self {
            subject,
            clip,
            options: ClipOptions::default(),
        }
    }

    /// Replaces the clip options.
    #[must_use]
    pub fn with_options(mut self, options: ClipOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the intersection, returning the output rings.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the crossings cannot
    /// be classified consistently.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        clip_polygons(&self.subject, &self.clip, BooleanOp::Intersect, self.options)
    }
}
