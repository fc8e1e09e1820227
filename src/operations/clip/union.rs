use crate::error::Result;
use crate::math::Point2;

use super::engine::clip_polygons;
use super::select::BooleanOp;
use super::ClipOptions;

/// Computes the boolean union of two simple polygons.
///
/// When the boundaries enclose a gap between them, the gap comes back as an
/// extra ring wound clockwise.
pub struct Union {
    subject: Vec<Point2>,
    clip: Vec<Point2>,
    options: ClipOptions,
}

impl Union {
    /// Creates a new `Union` operation with default options.
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

    /// Executes the union, returning the output rings.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the crossings cannot
    /// be classified consistently.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        clip_polygons(&self.subject, &self.clip, BooleanOp::Union, self.options)
    }
}
