use crate::error::{OperationError, Result};
use crate::geometry::{Arc, Circle, Line, Path};
use crate::math::Point2;

/// Scales a path uniformly from a center point.
pub struct Scale<'a> {
    path: &'a Path,
    center: Point2,
    factor: f64,
}

impl<'a> Scale<'a> {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(path: &'a Path, center: Point2, factor: f64) -> Self {
        Self {
            path,
            center,
            factor,
        }
    }

    /// Executes the scaling, returning the scaled path.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is not finite, or is not positive
    /// for a circle or arc.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<Path> {
        if !self.factor.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "scale factor must be finite, got {}",
                self.factor
            ))
            .into());
        }
        if self.factor == 1.0 {
            return Ok(*self.path);
        }

        let scale = |p: &Point2| self.center + (p - self.center) * self.factor;
        let scale_radius = |radius: f64| {
            if self.factor > 0.0 {
                Ok(radius * self.factor)
            } else {
                Err(OperationError::InvalidInput(format!(
                    "scale factor {} would make the radius non-positive",
                    self.factor
                )))
            }
        };

        let scaled = match *self.path {
            Path::Line(line) => Path::Line(Line {
                origin: scale(&line.origin),
                end: scale(&line.end),
            }),
            Path::Circle(circle) => Path::Circle(Circle {
                origin: scale(&circle.origin),
                radius: scale_radius(circle.radius)?,
            }),
            Path::Arc(arc) => Path::Arc(Arc {
                origin: scale(&arc.origin),
                radius: scale_radius(arc.radius)?,
                ..arc
            }),
        };
        Ok(scaled)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn circle_scales_about_origin() {
        let circle: Path = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap().into();
        let Path::Circle(scaled) = Scale::new(&circle, Point2::origin(), 2.0).execute().unwrap() else {
            panic!("expected a circle");
        };
        assert_eq!(scaled.origin(), &Point2::new(2.0, 4.0));
        assert_eq!(scaled.radius(), 6.0);
    }

    #[test]
    fn line_scales_about_center() {
        let line: Path = Line::new(Point2::new(2.0, 2.0), Point2::new(4.0, 2.0)).unwrap().into();
        let Path::Line(scaled) = Scale::new(&line, Point2::new(2.0, 2.0), 0.5).execute().unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(scaled.origin(), &Point2::new(2.0, 2.0));
        assert_eq!(scaled.end(), &Point2::new(3.0, 2.0));
    }

    #[test]
    fn negative_factor_on_arc_returns_error() {
        let arc: Path = Arc::new(Point2::origin(), 1.0, 0.0, 90.0).unwrap().into();
        assert!(Scale::new(&arc, Point2::origin(), -1.0).execute().is_err());
        assert!(Scale::new(&arc, Point2::origin(), f64::NAN).execute().is_err());
    }

    #[test]
    fn negative_factor_on_line_flips_it() {
        let line: Path = Line::new(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)).unwrap().into();
        let Path::Line(scaled) = Scale::new(&line, Point2::origin(), -1.0).execute().unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(scaled.end(), &Point2::new(-2.0, 0.0));
    }
}
