use crate::math::{Point, Real, Vector};
use crate::shape::TriangleSoup;
use crate::utils::ccw_face_normal_unnormalized;
use alloc::vec::Vec;

/// The ratio between the bounding sphere radius of a soup and the length of its normal segments.
const SEGMENT_LENGTH_RATIO: Real = 1.0 / 25.0;

/// Line segments showing the face normals of a triangle soup, two points per segment.
///
/// Meant for visually checking that the triangles of a mesh are consistently oriented,
/// with outward normals, as assumed by [`split_disjoint_geometry`](super::split_disjoint_geometry).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalSegments {
    /// For each triangle, its centroid followed by the centroid moved along the normal.
    pub outward: Vec<Point<Real>>,
    /// For each triangle, its centroid followed by the centroid moved against the normal.
    pub inward: Vec<Point<Real>>,
}

/// Computes the segments displaying the normal of each triangle of `soup`.
///
/// All segments start at the centroid of their triangle and have the same length, equal
/// to 1/25th of the soup's bounding sphere radius. A degenerate triangle gets a segment
/// of length zero.
pub fn triangle_normal_segments(soup: &TriangleSoup) -> NormalSegments {
    let length = soup.bounding_sphere().radius() * SEGMENT_LENGTH_RATIO;
    let mut outward = Vec::with_capacity(soup.num_triangles() * 2);
    let mut inward = Vec::with_capacity(soup.num_triangles() * 2);

    for [v1, v2, v3] in soup.triangles() {
        let midpoint = Point::from((v1.coords + v2.coords + v3.coords) / 3.0);
        let normal = ccw_face_normal_unnormalized([&v1, &v2, &v3])
            .try_normalize(0.0)
            .map(|n| n * length)
            .unwrap_or_else(Vector::zeros);

        outward.push(midpoint);
        outward.push(midpoint + normal);
        inward.push(midpoint);
        inward.push(midpoint - normal);
    }

    NormalSegments { outward, inward }
}
