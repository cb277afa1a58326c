//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal_unnormalized;
pub use self::hashable_point::HashablePoint;
pub use self::not_atan2::not_atan2;

mod ccw_face_normal;
mod hashable_point;
pub mod hashmap;
mod not_atan2;
