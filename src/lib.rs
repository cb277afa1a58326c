/*!
meshsplit3d
========

**meshsplit3d** splits a 3-dimensional triangle soup into the disjoint bodies
it is made of, written with the rust programming language.

A body is a maximal set of triangles connected through shared edges. Triangles
are matched through their directed edges: two triangles sharing an edge with
opposite windings are neighbors. When more than two triangles share the same
edge, the continuing triangle is selected by comparing the signed angles between
the face normals around that edge, using [`utils::not_atan2`] instead of a real
arctangent.

```
use meshsplit3d::transformation::split_disjoint_geometry;

let pos = [
    // Triangle 1.
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    // Triangle 2, far away from the first one.
    10.0, 0.0, 0.0, 11.0, 0.0, 0.0, 10.0, 1.0, 0.0,
];
let parts = split_disjoint_geometry(&pos);
assert_eq!(parts.len(), 2);
assert_eq!(parts[0], &pos[..9]);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod topology;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use na::{Point3, Vector3};

    /// The scalar type used throughout this crate.
    ///
    /// Everything is computed in single precision: the ordering of the
    /// not-atan2 angles must not change by widening intermediate results.
    pub use f32 as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of floats describing one triangle of a flat position buffer.
    pub const TRIANGLE_STRIDE: usize = 3 * DIM;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
