use crate::geometry::Path;

/// Computes the length of a path.
pub struct PathLength<'a> {
    path: &'a Path,
}

impl<'a> PathLength<'a> {
    /// Creates a new `PathLength` query.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Executes the query.
    ///
    /// A line measures its endpoint distance, a circle `2πr`, and an arc
    /// its circle's length scaled by the swept fraction of a full turn.
    #[must_use]
    pub fn execute(&self) -> f64 {
        match self.path {
            Path::Line(line) => line.length(),
            Path::Circle(circle) => circle.length(),
            Path::Arc(arc) => arc.length(),
        }
    }
}

/// Shorthand for [`PathLength`].
#[must_use]
pub fn path_length(path: &Path) -> f64 {
    PathLength::new(path).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Arc, Circle, Line};
    use crate::math::Point2;

    #[test]
    fn line_length_3_4_5() {
        let line: Path = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)).unwrap().into();
        assert_relative_eq!(path_length(&line), 5.0);
    }

    #[test]
    fn circle_circumference() {
        let circle: Path = Circle::new(Point2::new(7.0, -2.0), 2.0).unwrap().into();
        assert_relative_eq!(PathLength::new(&circle).execute(), 4.0 * PI);
    }

    #[test]
    fn arc_length_uses_unwrapped_span() {
        let half: Path = Arc::new(Point2::origin(), 1.0, 0.0, 180.0).unwrap().into();
        assert_relative_eq!(path_length(&half), PI);

        let wrapped: Path = Arc::new(Point2::origin(), 2.0, 315.0, 45.0).unwrap().into();
        assert_relative_eq!(path_length(&wrapped), PI);
    }
}
