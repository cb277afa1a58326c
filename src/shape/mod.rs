//! Shapes supported by meshsplit3d.

pub use self::triangle_soup::{TriangleSoup, TriangleSoupError, TriangleSoupIter};
pub use self::vertex_attribute::{VertexAttribute, VertexAttributeError};

mod triangle_soup;
mod vertex_attribute;
