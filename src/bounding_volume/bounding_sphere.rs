//! Bounding sphere.

use crate::bounding_volume::{point_cloud_bounding_sphere_with_center, Aabb};
use crate::math::{Point, Real};
use crate::shape::TriangleSoup;
use alloc::vec::Vec;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}

impl TriangleSoup<'_> {
    /// A bounding sphere of all the vertices of this soup.
    ///
    /// The sphere is centered on the center of the vertices AABB, with the smallest
    /// radius containing every vertex.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let pts: Vec<_> = self.vertices().collect();
        let center = Aabb::from_points(pts.iter().copied()).center();
        let (center, radius) = point_cloud_bounding_sphere_with_center(&pts, center);
        BoundingSphere::new(center, radius)
    }
}
