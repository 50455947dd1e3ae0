pub mod model;
pub mod path;

pub use model::Model;
pub use path::{Arc, Circle, Curve, Line, Path, PathKind};
