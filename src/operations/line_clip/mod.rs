//! Clipping of single line segments against convex regions.

mod cyrus_beck;
mod liang_barsky;

pub use cyrus_beck::ClipSegmentToConvex;
pub use liang_barsky::{Aabb, ClipSegmentToBox};
