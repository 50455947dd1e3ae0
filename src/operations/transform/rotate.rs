use crate::geometry::{Arc, Circle, Line, Path};
use crate::math::{point, Point2};

/// Rotates a path counter-clockwise about a point.
pub struct Rotate<'a> {
    path: &'a Path,
    angle: f64,
    about: Point2,
}

impl<'a> Rotate<'a> {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in degrees.
    #[must_use]
    pub fn new(path: &'a Path, angle: f64, about: Point2) -> Self {
        Self { path, angle, about }
    }

    /// Executes the rotation, returning the rotated path.
    ///
    /// Arcs keep their stored angle convention: both angles are shifted by
    /// the rotation and not normalized.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Path {
        if self.angle == 0.0 {
            return *self.path;
        }
        let turn = |p: &Point2| point::rotate(p, self.angle, &self.about);
        match *self.path {
            Path::Line(line) => Path::Line(Line {
                origin: turn(&line.origin),
                end: turn(&line.end),
            }),
            Path::Circle(circle) => Path::Circle(Circle {
                origin: turn(&circle.origin),
                ..circle
            }),
            Path::Arc(arc) => Path::Arc(Arc {
                origin: turn(&arc.origin),
                start_angle: arc.start_angle + self.angle,
                end_angle: arc.end_angle + self.angle,
                ..arc
            }),
        }
    }
}
