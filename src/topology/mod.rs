pub mod contour;
pub mod vertex;

pub use contour::Contour;
pub use vertex::{Classification, VertexData, VertexId};

use crate::error::TopologyError;

/// Links `a` in `first` and `b` in `second` as mutual twins.
///
/// # Errors
///
/// Returns an error if either handle is not found in its contour.
pub fn link_twins(
    first: &mut Contour,
    a: VertexId,
    second: &mut Contour,
    b: VertexId,
) -> Result<(), TopologyError> {
    first.vertex_mut(a)?.twin = Some(b);
    second.vertex_mut(b)?.twin = Some(a);
    Ok(())
}

/// Verifies that every intersection vertex of `first` has a twin in `second`
/// that points back to it.
///
/// # Errors
///
/// Returns `TopologyError::InvalidTopology` on the first broken link.
pub fn check_twins(first: &Contour, second: &Contour) -> Result<(), TopologyError> {
    for id in first.ids() {
        let v = first.vertex(id)?;
        if !v.is_intersection {
            continue;
        }
        let twin = v
            .twin
            .ok_or_else(|| TopologyError::InvalidTopology("intersection without twin".into()))?;
        if second.vertex(twin)?.twin != Some(id) {
            return Err(TopologyError::InvalidTopology(
                "twin link is not mutual".into(),
            ));
        }
    }
    Ok(())
}
