use crate::math::Point2;

slotmap::new_key_type! {
    /// Stable handle to a vertex inside a [`Contour`](super::Contour).
    pub struct VertexId;
}

/// Entry/exit label of an intersection vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    /// Not labelled yet, or not an intersection vertex.
    #[default]
    None,
    /// The subject boundary crosses into the clip region here.
    Entry,
    /// The subject boundary leaves the clip region here.
    Exit,
}

impl Classification {
    /// The label seen from the other contour.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Entry => Self::Exit,
            Self::Exit => Self::Entry,
        }
    }
}

/// Data associated with a contour vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position of the vertex.
    pub point: Point2,
    /// `true` if inserted by the intersection phase.
    pub is_intersection: bool,
    /// Entry/exit label, meaningful for intersection vertices only.
    pub classification: Classification,
    /// Set once the traversal has consumed this vertex.
    pub visited: bool,
    /// Counterpart in the other contour (intersection vertices only).
    pub twin: Option<VertexId>,
    pub(crate) next: VertexId,
    pub(crate) prev: VertexId,
}

impl VertexData {
    /// Creates an original polygon vertex.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            is_intersection: false,
            classification: Classification::None,
            visited: false,
            twin: None,
            next: VertexId::default(),
            prev: VertexId::default(),
        }
    }

    /// Creates an intersection vertex; its twin is linked afterwards.
    #[must_use]
    pub fn intersection(point: Point2) -> Self {
        Self {
            is_intersection: true,
            ..Self::new(point)
        }
    }
}
