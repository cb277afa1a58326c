use crate::math::*;

/// Computes the non-normalized normal `(b - a) x (c - a)` of the triangle `[a, b, c]`.
///
/// The result points toward the side from which the triangle is seen counter-clock-wise.
/// Its magnitude is twice the triangle area, and it is zero for a degenerate triangle.
#[inline]
pub fn ccw_face_normal_unnormalized(pts: [&Point<Real>; 3]) -> Vector<Real> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    ab.cross(&ac)
}
