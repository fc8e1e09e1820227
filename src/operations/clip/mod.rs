//! Weiler-Atherton clipping of one simple polygon against another.
//!
//! The pipeline runs in three phases over a pair of augmented contours:
//!
//! 1. **Intersection**: every subject edge is tested against every clip edge;
//!    crossings are inserted into both contours, sorted per edge by their
//!    parametric position, and linked as twins.
//! 2. **Classification**: each subject crossing is labelled entry or exit by
//!    probing the subject boundary just past it; labels must alternate.
//! 3. **Traversal**: rings are walked from unvisited start crossings, switching
//!    contours at every crossing until the walk returns to its start.

mod classify;
mod engine;
mod intersect;
mod intersect_op;
mod select;
mod subtract;
mod traverse;
mod union;

pub use engine::{clip_polygons, ClipGraph};
pub use intersect_op::Intersect;
pub use select::BooleanOp;
pub use subtract::Subtract;
pub use union::Union;

use crate::math::TOLERANCE;

/// Parameters controlling a clip run.
#[derive(Debug, Clone, Copy)]
pub struct ClipOptions {
    /// Parallel threshold for `|r × s|` and exclusion band for crossings
    /// near an edge endpoint.
    pub epsilon: f64,
    /// Reverse clockwise inputs to counter-clockwise before clipping.
    pub orient_inputs: bool,
    /// Fail with `ClassificationInconsistency` when entry/exit labels do not
    /// alternate along the subject.
    pub check_alternation: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            epsilon: TOLERANCE,
            orient_inputs: false,
            check_alternation: true,
        }
    }
}
