use crate::math::{Point, Real};
use core::hash::{Hash, Hasher};

/// A point that can be used as a hash-map key.
///
/// Two points are equal if all their coordinates compare equal, without any tolerance.
/// Vertices shared by adjacent triangles are expected to have bit-identical coordinates.
///
/// `0.0` and `-0.0` are equal and hash identically. A point with a NaN coordinate is
/// never equal to anything, including itself, so it never matches another vertex.
#[derive(Copy, Clone, Debug)]
pub struct HashablePoint(pub Point<Real>);

impl HashablePoint {
    /// Wraps the point `pt`.
    #[inline]
    pub fn new(pt: Point<Real>) -> Self {
        HashablePoint(pt)
    }
}

impl PartialEq for HashablePoint {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for HashablePoint {}

impl Hash for HashablePoint {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in self.0.coords.iter() {
            // Adding 0.0 turns -0.0 into 0.0 and leaves every other value untouched.
            (*coord + 0.0).to_bits().hash(state);
        }
    }
}
