use super::common::cube;
use meshsplit3d::math::{Point, Real};
use meshsplit3d::shape::VertexAttribute;
use meshsplit3d::topology::SplitOptions;
use meshsplit3d::transformation::{split_disjoint_geometry, split_disjoint_geometry_with_attributes};

// Per-vertex face normals, and texture coordinates whose `u` is the triangle index.
fn cube_attributes(pos: &[Real]) -> (Vec<Real>, Vec<Real>) {
    let mut normals = vec![];
    let mut uvs = vec![];

    for (tri_id, tri) in pos.chunks_exact(9).enumerate() {
        let a = Point::new(tri[0], tri[1], tri[2]);
        let b = Point::new(tri[3], tri[4], tri[5]);
        let c = Point::new(tri[6], tri[7], tri[8]);
        let normal = (b - a).cross(&(c - a)).normalize();

        for vid in 0..3 {
            normals.extend_from_slice(normal.as_slice());
            uvs.extend_from_slice(&[tri_id as Real, vid as Real]);
        }
    }

    (normals, uvs)
}

#[test]
fn attributes_are_split_with_the_positions() {
    let mut pos = cube([0.0; 3]);
    pos.extend(cube([1.0, 0.0, 0.0]));
    pos.extend(cube([10.0, 0.0, 0.0]));
    let (normals, uvs) = cube_attributes(&pos);

    let parts = split_disjoint_geometry_with_attributes(
        &pos,
        &[VertexAttribute::new(&normals, 3), VertexAttribute::new(&uvs, 2)],
        &SplitOptions::default(),
    )
    .unwrap();

    let positions: Vec<_> = parts.iter().map(|part| part.positions.clone()).collect();
    assert_eq!(positions, split_disjoint_geometry(&pos));
    assert_eq!(parts.len(), 3);

    for part in &parts {
        assert_eq!(part.attributes.len(), 2);
        let num_triangles = part.positions.len() / 9;
        assert_eq!(part.attributes[0].len(), num_triangles * 9);
        assert_eq!(part.attributes[1].len(), num_triangles * 6);

        for k in 0..num_triangles {
            let part_uvs = &part.attributes[1][k * 6..k * 6 + 6];
            let tri_id = part_uvs[0] as usize;
            assert_eq!(part_uvs, [tri_id as Real, 0.0, tri_id as Real, 1.0, tri_id as Real, 2.0]);

            // The attributes come from the same input triangle as the positions.
            assert_eq!(
                part.positions[k * 9..k * 9 + 9],
                pos[tri_id * 9..tri_id * 9 + 9]
            );
            assert_eq!(
                part.attributes[0][k * 9..k * 9 + 9],
                normals[tri_id * 9..tri_id * 9 + 9]
            );
        }
    }
}
