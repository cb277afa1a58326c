use crate::math::{Real, TRIANGLE_STRIDE};
use crate::shape::{TriangleSoup, VertexAttribute, VertexAttributeError};
use crate::topology::{resolve_neighbor, DirectedEdge, EdgeAdjacencyIndex, SplitOptions};
use alloc::{vec, vec::Vec};

/// The disjoint bodies of a triangle soup.
///
/// Two triangles belong to the same body if they are connected through a chain of
/// triangles sharing edges with compatible orientations. Where an edge is shared
/// by more than two triangles, only the one selected by [`resolve_neighbor`] continues
/// the body.
///
/// Bodies are numbered by order of their first triangle in the position buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DisjointBodies {
    /// The `face_colors[i]` gives the body index of the i-th triangle.
    pub face_colors: Vec<u32>,
    /// The set of triangles grouped by body, each body listing its triangles in
    /// the order they were reached.
    pub grouped_faces: Vec<u32>,
    /// The range of bodies. `self.grouped_faces[self.ranges[i]..self.ranges[i + 1]]`
    /// contains the indices of all the triangles part of the i-th body.
    pub ranges: Vec<usize>,
}

impl DisjointBodies {
    /// Computes the disjoint bodies of `soup`, building its edge adjacency first.
    pub fn from_soup(soup: &TriangleSoup, options: &SplitOptions) -> Self {
        let index = EdgeAdjacencyIndex::new(soup);
        Self::compute(soup, &index, options)
    }

    /// Computes the disjoint bodies of `soup`, given its edge adjacency `index`.
    ///
    /// The `index` must be the one built from `soup`, otherwise this might panic or
    /// produce an unexpected result.
    pub fn compute(soup: &TriangleSoup, index: &EdgeAdjacencyIndex, options: &SplitOptions) -> Self {
        let num_triangles = soup.num_triangles();
        let mut face_colors = vec![u32::MAX; num_triangles];
        let mut grouped_faces = Vec::with_capacity(num_triangles);
        let mut ranges = vec![0];
        let mut stack = vec![];

        for seed in 0..num_triangles as u32 {
            if face_colors[seed as usize] != u32::MAX {
                continue;
            }

            debug_assert!(stack.is_empty());
            debug_assert_eq!(Some(&grouped_faces.len()), ranges.last());
            let color = ranges.len() as u32 - 1;
            face_colors[seed as usize] = color;
            stack.push(seed);

            while let Some(tri_id) = stack.pop() {
                grouped_faces.push(tri_id);
                let [v1, v2, v3] = soup.triangle(tri_id);

                // Each edge is listed first, with the remaining vertex last.
                for tri in [[&v1, &v2, &v3], [&v2, &v3, &v1], [&v3, &v1, &v2]] {
                    let edge = DirectedEdge::new(*tri[0], *tri[1]);

                    // No triangle with the reversed edge: this is a boundary edge.
                    let Some(candidates) = index.neighbors_across(&edge) else {
                        continue;
                    };

                    let next = resolve_neighbor(tri, candidates, options);
                    if face_colors[next as usize] == u32::MAX {
                        face_colors[next as usize] = color;
                        stack.push(next);
                    }
                }
            }

            ranges.push(grouped_faces.len());
        }

        log::debug!(
            "Found {} disjoint bodies among {} triangles.",
            ranges.len() - 1,
            num_triangles
        );

        DisjointBodies {
            face_colors,
            grouped_faces,
            ranges,
        }
    }

    /// The total number of bodies.
    #[inline]
    pub fn num_bodies(&self) -> usize {
        self.ranges.len() - 1
    }

    /// The triangles of the `i`-th body, in the order they were reached.
    #[inline]
    pub fn body(&self, i: usize) -> &[u32] {
        &self.grouped_faces[self.ranges[i]..self.ranges[i + 1]]
    }

    /// An iterator through the triangles of every body.
    pub fn bodies(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.ranges
            .windows(2)
            .map(|range| &self.grouped_faces[range[0]..range[1]])
    }

    /// Copies the triangles of each body into its own flat position buffer.
    ///
    /// The `soup` must be the one used to generate `self`, otherwise it might panic or
    /// produce an unexpected result.
    pub fn to_position_buffers(&self, soup: &TriangleSoup) -> Vec<Vec<Real>> {
        self.copy_per_triangle(soup.positions(), TRIANGLE_STRIDE)
    }

    /// Copies the per-vertex `attribute`, with `item_size` floats per vertex, into one buffer
    /// per body.
    ///
    /// The triangles of each buffer are in the same order as [`Self::to_position_buffers`].
    /// Fails if `attribute` does not contain exactly one item for each vertex of each triangle.
    pub fn to_attribute_buffers(
        &self,
        attribute: &[Real],
        item_size: usize,
    ) -> Result<Vec<Vec<Real>>, VertexAttributeError> {
        let attribute = VertexAttribute::new(attribute, item_size);
        attribute.check(self.face_colors.len())?;
        Ok(self.copy_per_triangle(attribute.data, attribute.triangle_stride()))
    }

    fn copy_per_triangle(&self, data: &[Real], stride: usize) -> Vec<Vec<Real>> {
        self.bodies()
            .map(|body| {
                let mut buffer = Vec::with_capacity(body.len() * stride);
                for tri_id in body {
                    let start = *tri_id as usize * stride;
                    buffer.extend_from_slice(&data[start..start + stride]);
                }
                buffer
            })
            .collect()
    }
}
