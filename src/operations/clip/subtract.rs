use crate::error::Result;
use crate::math::Point2;

use super::engine::clip_polygons;
use super::select::BooleanOp;
use super::ClipOptions;

/// Computes the boolean difference `subject - clip` of two simple polygons.
pub struct Subtract {
    subject: Vec<Point2>,
    clip: Vec<Point2>,
    options: ClipOptions,
}

impl Subtract {
    /// Creates a new `Subtract` operation with default options.
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

    /// Executes the difference, returning the output rings.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid, the crossings cannot be
    /// classified consistently, or the clip sits strictly inside the subject
    /// (`ClipError::HoleInResult`).
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        clip_polygons(&self.subject, &self.clip, BooleanOp::Subtract, self.options)
    }
}
