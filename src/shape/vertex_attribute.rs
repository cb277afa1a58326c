use crate::math::Real;

/// Indicated an inconsistency between a vertex attribute buffer and its triangle soup.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexAttributeError {
    /// A vertex attribute must have at least one component per vertex.
    #[error("a vertex attribute must have at least one component per vertex.")]
    ZeroItemSize,
    /// The buffer does not contain exactly one item per vertex of the soup.
    #[error("the attribute buffer has {len} floats, which is not {item_size} floats for each vertex of {num_triangles} triangles.")]
    LengthMismatch {
        /// The number of floats of the rejected buffer.
        len: usize,
        /// The number of floats per vertex.
        item_size: usize,
        /// The number of triangles of the soup.
        num_triangles: usize,
    },
}

/// A per-vertex attribute of a triangle soup, like normals, colors or texture coordinates.
///
/// Vertices are not indexed: the buffer contains `item_size` floats for each of the three
/// vertices of each triangle, in the same order as the position buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexAttribute<'a> {
    /// The interleaved components of the attribute.
    pub data: &'a [Real],
    /// The number of floats per vertex.
    pub item_size: usize,
}

impl<'a> VertexAttribute<'a> {
    /// An attribute with `item_size` floats per vertex.
    #[inline]
    pub fn new(data: &'a [Real], item_size: usize) -> Self {
        VertexAttribute { data, item_size }
    }

    /// The number of floats of this attribute for one triangle.
    #[inline]
    pub fn triangle_stride(&self) -> usize {
        3 * self.item_size
    }

    /// Checks that this attribute has exactly one item per vertex of `num_triangles` triangles.
    pub fn check(&self, num_triangles: usize) -> Result<(), VertexAttributeError> {
        if self.item_size == 0 {
            return Err(VertexAttributeError::ZeroItemSize);
        }

        let stride = self.triangle_stride();
        if self.data.len() % stride != 0 || self.data.len() / stride != num_triangles {
            return Err(VertexAttributeError::LengthMismatch {
                len: self.data.len(),
                item_size: self.item_size,
                num_triangles,
            });
        }

        Ok(())
    }
}
