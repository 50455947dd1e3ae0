use crate::geometry::{Arc, Circle, Line, Path};
use crate::math::Vector2;

/// Moves a path by a displacement vector.
pub struct Translate<'a> {
    path: &'a Path,
    displacement: Vector2,
}

impl<'a> Translate<'a> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(path: &'a Path, displacement: Vector2) -> Self {
        Self { path, displacement }
    }

    /// Executes the translation, returning the moved path.
    #[must_use]
    pub fn execute(&self) -> Path {
        let d = self.displacement;
        match *self.path {
            Path::Line(line) => Path::Line(Line {
                origin: line.origin + d,
                end: line.end + d,
            }),
            Path::Circle(circle) => Path::Circle(Circle {
                origin: circle.origin + d,
                ..circle
            }),
            Path::Arc(arc) => Path::Arc(Arc {
                origin: arc.origin + d,
                ..arc
            }),
        }
    }
}
