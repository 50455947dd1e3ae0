pub mod error;
pub mod geometry;
mod log;
pub mod math;
pub mod operations;

pub use error::{Error, Result};
pub use geometry::{Arc, Circle, Curve, Line, Model, Path, PathKind};
pub use math::{Point2, Vector2};
pub use operations::query::{
    intersect, model_extents, path_extents, path_length, Extents, Intersection,
};
