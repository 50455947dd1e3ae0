use crate::error::{OperationError, Result};
use crate::geometry::{Arc, Line, Path};
use crate::math::{angle, is_between, point, Point2, ROUND_ACCURACY};

/// Breaks a path in two at a point on it.
///
/// A line or arc yields the part up to the point and the part after it.
/// A circle has no ends to split between, so it becomes a single full-turn
/// arc starting and ending at the point.
pub struct BreakAtPoint<'a> {
    path: &'a Path,
    point: Point2,
}

impl<'a> BreakAtPoint<'a> {
    /// Creates a new `BreakAtPoint` operation.
    #[must_use]
    pub fn new(path: &'a Path, point: Point2) -> Self {
        Self { path, point }
    }

    /// Executes the break, returning `(first, second)`; `second` is `None`
    /// for circles.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not on the path.
    pub fn execute(&self) -> Result<(Path, Option<Path>)> {
        let at = self.point;
        match *self.path {
            Path::Line(line) => {
                if !on_segment(&at, &line) {
                    return Err(not_on_path("line"));
                }
                Ok((
                    Path::Line(Line { end: at, ..line }),
                    Some(Path::Line(Line { origin: at, ..line })),
                ))
            }
            Path::Circle(circle) => {
                if !on_circle(&at, circle.origin(), circle.radius()) {
                    return Err(not_on_path("circle"));
                }
                let a = angle::of_point_in_degrees(circle.origin(), &at);
                Ok((
                    Path::Arc(Arc {
                        origin: circle.origin,
                        radius: circle.radius,
                        start_angle: a,
                        end_angle: a + 360.0,
                    }),
                    None,
                ))
            }
            Path::Arc(arc) => {
                let a = angle::of_point_in_degrees(arc.origin(), &at);
                if !on_circle(&at, arc.origin(), arc.radius()) || !arc.contains_angle(a, false) {
                    return Err(not_on_path("arc"));
                }
                Ok((
                    Path::Arc(Arc { end_angle: a, ..arc }),
                    Some(Path::Arc(Arc { start_angle: a, ..arc })),
                ))
            }
        }
    }
}

fn not_on_path(kind: &str) -> crate::error::Error {
    OperationError::InvalidInput(format!("break point is not on the {kind}")).into()
}

fn on_circle(p: &Point2, center: &Point2, radius: f64) -> bool {
    (point::distance(p, center) - radius).abs() <= ROUND_ACCURACY
}

fn on_segment(p: &Point2, line: &Line) -> bool {
    let d = line.end - line.origin;
    let len = d.norm();
    if len <= ROUND_ACCURACY {
        return point::distance(p, &line.origin) <= ROUND_ACCURACY;
    }
    let v = p - line.origin;
    let off_line = (d.x * v.y - d.y * v.x).abs() / len;
    let along = v.dot(&d) / len;
    off_line <= ROUND_ACCURACY && is_between(along, -ROUND_ACCURACY, len + ROUND_ACCURACY, false)
}
