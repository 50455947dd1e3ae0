//! Read-only queries over paths and model trees.

mod extents;
mod intersect;
mod length;

pub use extents::{model_extents, path_extents, Extents, ModelExtents, PathExtents};
pub use intersect::{intersect, Intersection, PathIntersect};
pub use length::{path_length, PathLength};
