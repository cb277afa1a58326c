use crate::math::{Point, Real};
use crate::topology::{SplitOptions, TriangleRecord};
use crate::utils::{ccw_face_normal_unnormalized, not_atan2};
use core::f32::consts::PI;

/// Selects the triangle continuing the body of `triangle` across its edge `v1 -> v2`.
///
/// `triangle` is `[v1, v2, v3]`, rotated so that the crossed edge comes first, and
/// `candidates` are the triangles containing the reversed edge `v2 -> v1`, in buffer
/// order. Assuming each body has outward normals, the continuation is the first surface
/// met when sweeping around the edge, which is the candidate with the largest signed angle
/// between the normal of `triangle` and its own normal. Candidates almost facing `triangle`
/// (angle close to `PI`) are assumed to belong to another body touching this one,
/// and are ranked last. Ties are won by the first candidate.
///
/// This runs in linear time with the number of candidates.
///
/// # Panics
///
/// Panics if `candidates` is empty.
pub fn resolve_neighbor(
    triangle: [&Point<Real>; 3],
    candidates: &[TriangleRecord],
    options: &SplitOptions,
) -> u32 {
    assert!(
        !candidates.is_empty(),
        "Cannot resolve the neighbor of a boundary edge."
    );

    if candidates.len() == 1 {
        return candidates[0].index;
    }

    let normal = ccw_face_normal_unnormalized(triangle);
    let edge = *triangle[1] - *triangle[0];
    let max_angle = PI - options.effective_epsilon(edge.norm());

    // With `dot = n1 . n2` and `cross = (n1 x n2) . edge`, the signed angle from `n1` to `n2`
    // around the edge has the same order as `atan2(cross, dot)`. Only that order is needed.
    let mut best = candidates[0].index;
    let mut best_angle = -Real::INFINITY;

    for candidate in candidates {
        let dot = normal.dot(&candidate.normal);
        let cross = normal.cross(&candidate.normal).dot(&edge);
        let mut angle = not_atan2(cross, dot);

        if angle > max_angle {
            angle = -PI;
        }

        if angle > best_angle {
            best_angle = angle;
            best = candidate.index;
        }
    }

    best
}
