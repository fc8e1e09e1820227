use crate::topology::Classification;

/// The type of polygon boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Region inside both polygons.
    Intersect,
    /// Region inside the subject and outside the clip.
    Subtract,
    /// Region inside either polygon.
    Union,
}

/// How the traversal walks the augmented contours for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalRule {
    /// Label of the subject crossings that start a new ring.
    pub start: Classification,
    /// Whether the clip contour is walked in its own order or reversed.
    pub clip_forward: bool,
}

/// How the two input polygons relate when their boundaries never cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    SubjectInsideClip,
    ClipInsideSubject,
    Disjoint,
}

/// Which input polygons make up the result when there are no crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Nothing,
    Subject,
    Clip,
    Both,
    /// The result would need a hole.
    Hole,
}

impl BooleanOp {
    /// Traversal rule for this operation.
    ///
    /// | op        | start | clip direction |
    /// |-----------|-------|----------------|
    /// | Intersect | Entry | forward        |
    /// | Subtract  | Exit  | backward       |
    /// | Union     | Exit  | forward        |
    ///
    /// The subject is always walked forward.
    #[must_use]
    pub fn traversal_rule(self) -> TraversalRule {
        match self {
            Self::Intersect => TraversalRule {
                start: Classification::Entry,
                clip_forward: true,
            },
            Self::Subtract => TraversalRule {
                start: Classification::Exit,
                clip_forward: false,
            },
            Self::Union => TraversalRule {
                start: Classification::Exit,
                clip_forward: true,
            },
        }
    }
}

/// Decides the result of an operation whose input boundaries do not cross.
///
/// | op        | subject in clip | clip in subject | disjoint |
/// |-----------|-----------------|-----------------|----------|
/// | Intersect | subject         | clip            | nothing  |
/// | Subtract  | nothing         | hole            | subject  |
/// | Union     | clip            | subject         | both     |
#[allow(clippy::match_same_arms)]
#[must_use]
pub fn select_without_crossings(op: BooleanOp, containment: Containment) -> Selection {
    match (op, containment) {
        (BooleanOp::Intersect, Containment::SubjectInsideClip) => Selection::Subject,
        (BooleanOp::Intersect, Containment::ClipInsideSubject) => Selection::Clip,
        (BooleanOp::Intersect, Containment::Disjoint) => Selection::Nothing,

        (BooleanOp::Subtract, Containment::SubjectInsideClip) => Selection::Nothing,
        (BooleanOp::Subtract, Containment::ClipInsideSubject) => Selection::Hole,
        (BooleanOp::Subtract, Containment::Disjoint) => Selection::Subject,

        (BooleanOp::Union, Containment::SubjectInsideClip) => Selection::Clip,
        (BooleanOp::Union, Containment::ClipInsideSubject) => Selection::Subject,
        (BooleanOp::Union, Containment::Disjoint) => Selection::Both,
    }
}
