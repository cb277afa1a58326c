use crate::math::{Point, Real, TRIANGLE_STRIDE};
use core::iter::FusedIterator;

/// Indicated an inconsistency while reading a flat position buffer as triangles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleSoupError {
    /// A triangle soup must contain at least one triangle.
    #[error("a triangle soup must contain at least one triangle.")]
    Empty,
    /// The buffer length is not a multiple of 9.
    #[error("the position buffer has {len} floats, which is not a multiple of 9.")]
    IncompleteTriangle {
        /// The number of floats of the rejected buffer.
        len: usize,
    },
    /// Triangle indices must fit in an `u32`.
    #[error("the position buffer has {count} triangles, more than can be indexed with an u32.")]
    TooManyTriangles {
        /// The number of triangles of the rejected buffer.
        count: usize,
    },
}

/// A non-indexed triangle mesh, borrowed from a flat buffer of positions.
///
/// The buffer contains the interleaved `x, y, z` coordinates of the vertices, three
/// vertices (9 floats) per triangle. No vertex is merged: two triangles are adjacent
/// only if they repeat the exact same coordinates.
#[derive(Copy, Clone, Debug)]
pub struct TriangleSoup<'a> {
    positions: &'a [Real],
}

impl<'a> TriangleSoup<'a> {
    /// Reads the flat position buffer `positions` as a list of triangles.
    ///
    /// Fails if the buffer is empty, if its length is not a multiple of 9, or if it
    /// contains more than `u32::MAX` triangles.
    pub fn new(positions: &'a [Real]) -> Result<Self, TriangleSoupError> {
        if positions.is_empty() {
            return Err(TriangleSoupError::Empty);
        }

        if positions.len() % TRIANGLE_STRIDE != 0 {
            return Err(TriangleSoupError::IncompleteTriangle {
                len: positions.len(),
            });
        }

        let count = positions.len() / TRIANGLE_STRIDE;
        if u32::try_from(count).is_err() {
            return Err(TriangleSoupError::TooManyTriangles { count });
        }

        Ok(TriangleSoup { positions })
    }

    /// The flat position buffer this soup reads from.
    #[inline]
    pub fn positions(&self) -> &'a [Real] {
        self.positions
    }

    /// The number of triangles of this soup.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.positions.len() / TRIANGLE_STRIDE
    }

    /// The 9 coordinates of the `i`-th triangle, as stored in the position buffer.
    #[inline]
    pub fn triangle_coords(&self, i: u32) -> &'a [Real] {
        let start = i as usize * TRIANGLE_STRIDE;
        &self.positions[start..start + TRIANGLE_STRIDE]
    }

    /// The vertices of the `i`-th triangle, in the winding order of the buffer.
    #[inline]
    pub fn triangle(&self, i: u32) -> [Point<Real>; 3] {
        let c = self.triangle_coords(i);
        [
            Point::new(c[0], c[1], c[2]),
            Point::new(c[3], c[4], c[5]),
            Point::new(c[6], c[7], c[8]),
        ]
    }

    /// An iterator through all the vertices of this soup, three per triangle.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + 'a {
        self.positions
            .chunks_exact(3)
            .map(|c| Point::new(c[0], c[1], c[2]))
    }

    /// An iterator through all the triangles of this soup, in buffer order.
    #[inline]
    pub fn triangles(&self) -> TriangleSoupIter<'a> {
        TriangleSoupIter {
            soup: *self,
            next: 0,
        }
    }
}

/// Iterator through the triangles of a [`TriangleSoup`].
#[derive(Clone, Debug)]
pub struct TriangleSoupIter<'a> {
    soup: TriangleSoup<'a>,
    next: u32,
}

impl Iterator for TriangleSoupIter<'_> {
    type Item = [Point<Real>; 3];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if (self.next as usize) < self.soup.num_triangles() {
            let tri = self.soup.triangle(self.next);
            self.next += 1;
            Some(tri)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.soup.num_triangles() - self.next as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TriangleSoupIter<'_> {}
impl FusedIterator for TriangleSoupIter<'_> {}
