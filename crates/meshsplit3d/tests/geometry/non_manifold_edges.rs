use super::common::{flatten, triangle_multiset};
use meshsplit3d::math::{Point, Real};
use meshsplit3d::shape::TriangleSoup;
use meshsplit3d::topology::{resolve_neighbor, DirectedEdge, EdgeAdjacencyIndex, SplitOptions};
use meshsplit3d::transformation::{split_disjoint_geometry, split_disjoint_geometry_with_options};

// A reference triangle on the plane `z = 0`, with the normal `+z`, followed by one
// triangle per angle, all attached to the reversed edge `(1, 0, 0) -> (0, 0, 0)`.
// The normal of each of them is the `+z` normal rotated by its angle around `+x`.
fn edge_fan(degrees: &[Real]) -> Vec<Real> {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let mut triangles = vec![[a, b, Point::new(0.5, 1.0, 0.0)]];

    for angle in degrees {
        let (sin, cos) = angle.to_radians().sin_cos();
        triangles.push([b, a, Point::new(0.5, -cos, -sin)]);
    }

    flatten(&triangles)
}

#[test]
fn resolver_picks_the_largest_angle_around_the_edge() {
    let pos = edge_fan(&[10.0, 90.0, 170.0]);
    let soup = TriangleSoup::new(&pos).unwrap();
    let index = EdgeAdjacencyIndex::new(&soup);

    let [a, b, c] = soup.triangle(0);
    let candidates = index
        .neighbors_across(&DirectedEdge::new(a, b))
        .expect("the fan edge should have candidates");
    assert_eq!(candidates.len(), 3);
    assert_eq!(
        resolve_neighbor([&a, &b, &c], candidates, &SplitOptions::default()),
        3
    );
}

#[test]
fn only_the_continuing_triangle_joins_the_body() {
    let pos = edge_fan(&[10.0, 90.0, 170.0]);
    let parts = split_disjoint_geometry(&pos);
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0][..9], pos[..9]);
    assert_eq!(parts[0][9..], pos[27..36]);
    assert_eq!(parts[1], &pos[9..18]);
    assert_eq!(parts[2], &pos[18..27]);

    // Same fan, but the continuing triangle comes first in the buffer.
    let pos = edge_fan(&[170.0, 10.0, 90.0]);
    let parts = split_disjoint_geometry(&pos);
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0][9..], pos[9..18]);
}

#[test]
fn facing_triangle_starts_its_own_body() {
    let pos = edge_fan(&[180.0, 10.0]);
    let parts = split_disjoint_geometry(&pos);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0][9..], pos[18..27]);
    assert_eq!(parts[1], &pos[9..18]);
}

#[test]
fn parallel_epsilon_decides_which_triangle_is_facing() {
    // The triangle at 179 degrees continues the body, unless the tolerance is large
    // enough for it to be considered facing the reference triangle.
    let pos = edge_fan(&[179.0, 10.0]);

    let parts = split_disjoint_geometry(&pos);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0][9..], pos[9..18]);
    assert_eq!(parts[1], &pos[18..27]);

    let options = SplitOptions::with_parallel_epsilon(0.5);
    let parts = split_disjoint_geometry_with_options(&pos, &options);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0][9..], pos[18..27]);
    assert_eq!(parts[1], &pos[9..18]);
}

#[test]
fn two_dihedral_angles_sharing_an_edge() {
    // Two pairs of triangles, each pair forming an angle, all sharing the edge
    // (0, 0, 0) - (0, 0, 1).
    #[rustfmt::skip]
    let angle0 = [
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.1, 0.0,
    ];
    #[rustfmt::skip]
    let angle1 = [
        0.0, 0.0, 0.0, 2.0, 0.1999, 0.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, -0.2, 0.0,
    ];
    let mut pos = angle0.to_vec();
    pos.extend_from_slice(&angle1);

    let parts = split_disjoint_geometry(&pos);
    assert_eq!(parts.len(), 2);
    assert_eq!(triangle_multiset(&parts[0]), triangle_multiset(&angle0));
    assert_eq!(triangle_multiset(&parts[1]), triangle_multiset(&angle1));
}
