use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given edges `p + t * r` and `q + u * s`, returns `(t, u)` if they are not
/// parallel. The caller decides which range of `t` and `u` it accepts.
#[must_use]
pub fn segment_intersection(
    p: &Point2,
    r: &Vector2,
    q: &Point2,
    s: &Vector2,
) -> Option<(f64, f64)> {
    segment_intersection_with_tolerance(p, r, q, s, TOLERANCE)
}

/// Same as [`segment_intersection`] with an explicit parallel threshold on `|r × s|`.
#[must_use]
pub fn segment_intersection_with_tolerance(
    p: &Point2,
    r: &Vector2,
    q: &Point2,
    s: &Vector2,
    eps: f64,
) -> Option<(f64, f64)> {
    let cross = r.perp(s);
    if cross.abs() < eps {
        return None;
    }
    let qp = q - p;
    let t = qp.perp(s) / cross;
    let u = qp.perp(r) / cross;
    Some((t, u))
}

/// Crossing of two bounded segments strictly inside both of them.
///
/// Returns `(point, t, u)` only when `eps < t < 1 - eps` and `eps < u < 1 - eps`.
/// Touches at either endpoint are excluded so that a shared vertex never
/// yields a duplicate crossing.
#[must_use]
pub fn interior_crossing(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = segment_intersection_with_tolerance(a0, &da, b0, &db, eps)?;
    let inside = |v: f64| v > eps && v < 1.0 - eps;
    if inside(t) && inside(u) {
        Some((point_at(a0, &da, t), t, u))
    } else {
        None
    }
}

/// Returns `true` if the segments meet within `eps` of an endpoint of either
/// one. [`interior_crossing`] reports nothing for such contacts.
#[must_use]
pub fn endpoint_contact(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, eps: f64) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    let Some((t, u)) = segment_intersection_with_tolerance(a0, &da, b0, &db, eps) else {
        return false;
    };
    let on = |v: f64| (-eps..=1.0 + eps).contains(&v);
    let inside = |v: f64| v > eps && v < 1.0 - eps;
    on(t) && on(u) && !(inside(t) && inside(u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    *origin + *dir * t
}

/// Returns `true` if the two segments are collinear and share a stretch of
/// positive length.
#[must_use]
pub fn edges_overlap(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, eps: f64) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_sq = da.norm_squared();
    if len_sq < eps * eps || da.perp(&db).abs() >= eps {
        return false;
    }
    // Distance of b0 from the carrier line of a.
    if (b0 - a0).perp(&da).abs() / len_sq.sqrt() >= eps {
        return false;
    }
    let t0 = (b0 - a0).dot(&da) / len_sq;
    let t1 = (b1 - a0).dot(&da) / len_sq;
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(1.0);
    (hi - lo) * len_sq.sqrt() > eps
}
