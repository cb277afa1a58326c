use crate::math::Real;
use core::f32::consts::{FRAC_PI_2, PI};

/// An alternative to `atan2` for when all that is needed is comparing angles.
///
/// It maps every value of `y / x` to the range `[-PI, PI]` and keeps almost the same
/// order as `atan2`: `not_atan2(y1, x1) < not_atan2(y2, x2)` holds whenever
/// `atan2(y1, x1) < atan2(y2, x2)` holds, unless either:
/// - the two `atan2` values are only a few ULPs apart, or
/// - one of the inputs has both coordinates zero, or both infinite.
///
/// The returned values do not have the `atan2` scale. Per quadrant:
/// - `x > 0 && y > 0`: `(0, PI/2)`
/// - `x > 0 && y < 0`: `(-PI/2, 0)`
/// - `x < 0 && y > 0`: `(PI/2, PI)`
/// - `x < 0 && y < 0`: `(-PI, -PI/2)`
///
/// When `y / x` is NaN (both zeros, both infinities, or any NaN input), `0.0` is returned.
/// No trigonometric function is evaluated.
///
/// ```
/// use meshsplit3d::utils::not_atan2;
///
/// assert!(not_atan2(1.0, 1.0) < not_atan2(1.0, -1.0));
/// assert!(not_atan2(-1.0, -1.0) < not_atan2(-1.0, 1.0));
/// assert_eq!(not_atan2(0.0, 0.0), 0.0);
/// ```
#[inline]
pub fn not_atan2(y: Real, x: Real) -> Real {
    let alpha = y / x;
    if alpha.is_nan() {
        // Actual atan2 implementations special-case these inputs one-by-one. There is no
        // meaningful order to preserve here.
        return 0.0;
    }

    // This is `PI/2 * alpha / (|alpha| + 1)`, with `alpha` kept in the divisor only so that
    // `alpha = ±inf` ends on the asymptote instead of producing a NaN.
    let normalized = FRAC_PI_2 * alpha.signum() * (1.0 - 1.0 / (1.0 + alpha.abs()));

    // `x = -0.0` belongs to the left half-plane.
    if x >= 0.0 && !x.is_sign_negative() {
        normalized
    } else {
        // `y = -0.0` gives `normalized - PI`.
        normalized + PI.copysign(y)
    }
}
