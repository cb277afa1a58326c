//! Transformation and decomposition of meshes.

pub use self::normal_segments::{triangle_normal_segments, NormalSegments};
pub use self::split_disjoint_geometry::{
    split_disjoint_geometry, split_disjoint_geometry_with_attributes,
    split_disjoint_geometry_with_options, try_split_disjoint_geometry, SplitGeometryError,
    SplitPart,
};

mod normal_segments;
mod split_disjoint_geometry;
