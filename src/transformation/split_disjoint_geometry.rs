use crate::math::Real;
use crate::shape::{TriangleSoup, TriangleSoupError, VertexAttribute, VertexAttributeError};
use crate::topology::{DisjointBodies, SplitOptions};
use alloc::{vec, vec::Vec};

/// Splits a triangle soup into its disjoint bodies.
///
/// `pos` contains the interleaved `x, y, z` coordinates of the vertices, three vertices
/// (9 floats) per triangle. Each returned part is a flat buffer with the same layout,
/// containing the triangles of one body.
///
/// Parts are ordered by their first triangle in `pos`. Inside of a part, triangles are
/// in the order they were reached from that first triangle.
///
/// The bodies are assumed to be oriented with outward normals, which is what edges
/// shared by more than two triangles are resolved with. T-junctions are not connected.
///
/// Returns an empty list if `pos` is empty or if its length is not a multiple of 9.
pub fn split_disjoint_geometry(pos: &[Real]) -> Vec<Vec<Real>> {
    split_disjoint_geometry_with_options(pos, &SplitOptions::default())
}

/// Splits a triangle soup into its disjoint bodies, with custom `options`.
///
/// See [`split_disjoint_geometry`].
pub fn split_disjoint_geometry_with_options(pos: &[Real], options: &SplitOptions) -> Vec<Vec<Real>> {
    match try_split_disjoint_geometry(pos, options) {
        Ok(parts) => parts,
        Err(err) => {
            log::debug!("Nothing to split: {err}");
            vec![]
        }
    }
}

/// Splits a triangle soup into its disjoint bodies, reporting why the input was rejected.
///
/// See [`split_disjoint_geometry`].
pub fn try_split_disjoint_geometry(
    pos: &[Real],
    options: &SplitOptions,
) -> Result<Vec<Vec<Real>>, TriangleSoupError> {
    let soup = TriangleSoup::new(pos)?;
    let bodies = DisjointBodies::from_soup(&soup, options);
    Ok(bodies.to_position_buffers(&soup))
}

/// Indicated why a triangle soup and its vertex attributes could not be split.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitGeometryError {
    /// The position buffer is not a valid triangle soup.
    #[error("invalid triangle soup: {0}")]
    InvalidSoup(#[from] TriangleSoupError),
    /// A vertex attribute does not match the position buffer.
    #[error("vertex attribute {index}: {source}")]
    InvalidAttribute {
        /// The index of the attribute in the input list.
        index: usize,
        /// What is wrong with this attribute.
        source: VertexAttributeError,
    },
}

/// One disjoint body of a triangle soup, with its vertex attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitPart {
    /// The flat position buffer of the body triangles.
    pub positions: Vec<Real>,
    /// The vertex attributes of the body triangles, in the same order as the input attributes.
    pub attributes: Vec<Vec<Real>>,
}

/// Splits a triangle soup into its disjoint bodies, splitting its vertex attributes along.
///
/// Each attribute is copied into every part with its own item size, for the same triangles,
/// in the same order as the positions. The parts are the same as with
/// [`split_disjoint_geometry_with_options`], except that invalid inputs are reported.
pub fn split_disjoint_geometry_with_attributes(
    pos: &[Real],
    attributes: &[VertexAttribute],
    options: &SplitOptions,
) -> Result<Vec<SplitPart>, SplitGeometryError> {
    let soup = TriangleSoup::new(pos)?;
    for (index, attribute) in attributes.iter().enumerate() {
        attribute
            .check(soup.num_triangles())
            .map_err(|source| SplitGeometryError::InvalidAttribute { index, source })?;
    }

    let bodies = DisjointBodies::from_soup(&soup, options);
    let mut parts: Vec<_> = bodies
        .to_position_buffers(&soup)
        .into_iter()
        .map(|positions| SplitPart {
            positions,
            attributes: Vec::with_capacity(attributes.len()),
        })
        .collect();

    for (index, attribute) in attributes.iter().enumerate() {
        let buffers = bodies
            .to_attribute_buffers(attribute.data, attribute.item_size)
            .map_err(|source| SplitGeometryError::InvalidAttribute { index, source })?;
        for (part, buffer) in parts.iter_mut().zip(buffers) {
            part.attributes.push(buffer);
        }
    }

    Ok(parts)
}
