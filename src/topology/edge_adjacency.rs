use crate::math::{Point, Real, Vector};
use crate::shape::TriangleSoup;
use crate::utils::hashmap::HashMap;
use crate::utils::{ccw_face_normal_unnormalized, HashablePoint};
use smallvec::SmallVec;

/// A triangle referenced by an entry of the [`EdgeAdjacencyIndex`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleRecord {
    /// The index of the triangle in the position buffer.
    pub index: u32,
    /// The non-normalized normal `(v2 - v1) x (v3 - v1)` of the triangle.
    pub normal: Vector<Real>,
}

/// An edge oriented by the winding of the triangle it belongs to.
///
/// The triangle `[v1, v2, v3]` has the three directed edges `(v1, v2)`, `(v2, v3)`
/// and `(v3, v1)`. An adjacent triangle with a compatible orientation contains the
/// same edge in the opposite direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    /// The first endpoint.
    pub from: HashablePoint,
    /// The second endpoint.
    pub to: HashablePoint,
}

impl DirectedEdge {
    /// The directed edge going from `from` to `to`.
    #[inline]
    pub fn new(from: Point<Real>, to: Point<Real>) -> Self {
        DirectedEdge {
            from: HashablePoint::new(from),
            to: HashablePoint::new(to),
        }
    }

    /// The same edge with the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        DirectedEdge {
            from: self.to,
            to: self.from,
        }
    }
}

type Bucket = SmallVec<[TriangleRecord; 2]>;

/// Maps each directed edge of a triangle soup to the triangles containing it.
///
/// Each bucket lists its triangles in buffer order. A closed oriented 2-manifold has
/// exactly one triangle per bucket, but any number is supported, for non-manifold
/// edges or inconsistently oriented triangles.
///
/// The index is immutable once built.
#[derive(Clone, Debug, Default)]
pub struct EdgeAdjacencyIndex {
    buckets: HashMap<DirectedEdge, Bucket>,
}

impl EdgeAdjacencyIndex {
    /// Builds the directed-edge index of all the triangles of `soup`.
    pub fn new(soup: &TriangleSoup) -> Self {
        let mut buckets: HashMap<DirectedEdge, Bucket> = HashMap::default();
        buckets.reserve(3 * soup.num_triangles());

        for (index, [v1, v2, v3]) in (0u32..).zip(soup.triangles()) {
            let record = TriangleRecord {
                index,
                normal: ccw_face_normal_unnormalized([&v1, &v2, &v3]),
            };

            for edge in [
                DirectedEdge::new(v1, v2),
                DirectedEdge::new(v2, v3),
                DirectedEdge::new(v3, v1),
            ] {
                buckets.entry(edge).or_default().push(record);
            }
        }

        let index = EdgeAdjacencyIndex { buckets };
        log::debug!(
            "Built the edge adjacency of {} triangles: {} directed edges, {} of them shared by more than one triangle.",
            soup.num_triangles(),
            index.num_directed_edges(),
            index.num_shared_directed_edges()
        );
        index
    }

    /// The triangles containing the exact directed edge `edge`, in buffer order.
    ///
    /// Returns `None` if no triangle has this edge.
    #[inline]
    pub fn triangles_with_edge(&self, edge: &DirectedEdge) -> Option<&[TriangleRecord]> {
        self.buckets.get(edge).map(|bucket| bucket.as_slice())
    }

    /// The candidate neighbors of a triangle across its directed edge `edge`.
    ///
    /// These are the triangles containing the reversed edge. Returns `None` if `edge`
    /// is a boundary edge.
    #[inline]
    pub fn neighbors_across(&self, edge: &DirectedEdge) -> Option<&[TriangleRecord]> {
        self.triangles_with_edge(&edge.reversed())
    }

    /// The number of distinct directed edges.
    #[inline]
    pub fn num_directed_edges(&self) -> usize {
        self.buckets.len()
    }

    /// The number of directed edges contained by more than one triangle.
    pub fn num_shared_directed_edges(&self) -> usize {
        self.buckets.values().filter(|b| b.len() > 1).count()
    }
}
