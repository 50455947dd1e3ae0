use crate::geometry::{Arc, Circle, Line, Path};
use crate::math::{angle, point};

/// Mirrors a path by negating its x and/or y coordinates.
pub struct Mirror<'a> {
    path: &'a Path,
    mirror_x: bool,
    mirror_y: bool,
}

impl<'a> Mirror<'a> {
    /// Creates a new `Mirror` operation.
    ///
    /// `mirror_x` negates x coordinates, `mirror_y` negates y coordinates.
    #[must_use]
    pub fn new(path: &'a Path, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            path,
            mirror_x,
            mirror_y,
        }
    }

    /// Executes the mirror, returning the mirrored path.
    ///
    /// A mirrored arc still sweeps counter-clockwise: when exactly one axis
    /// is mirrored its start and end angles trade places.
    #[must_use]
    pub fn execute(&self) -> Path {
        let (mx, my) = (self.mirror_x, self.mirror_y);
        match *self.path {
            Path::Line(line) => Path::Line(Line {
                origin: point::mirror(&line.origin, mx, my),
                end: point::mirror(&line.end, mx, my),
            }),
            Path::Circle(circle) => Path::Circle(Circle {
                origin: point::mirror(&circle.origin, mx, my),
                ..circle
            }),
            Path::Arc(arc) => {
                let start = angle::mirror(arc.start_angle, mx, my);
                let end = angle::mirror(arc.end_angle_unwrapped(), mx, my);
                let (start_angle, end_angle) = if mx == my { (start, end) } else { (end, start) };
                Path::Arc(Arc {
                    origin: point::mirror(&arc.origin, mx, my),
                    start_angle,
                    end_angle,
                    ..arc
                })
            }
        }
    }
}
