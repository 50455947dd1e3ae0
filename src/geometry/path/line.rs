use crate::error::{ensure_finite, Result};
use crate::math::{point, Point2};

use super::Curve;

/// A straight line segment from `origin` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub(crate) origin: Point2,
    pub(crate) end: Point2,
}

impl Line {
    /// Creates a new line segment.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite.
    pub fn new(origin: Point2, end: Point2) -> Result<Self> {
        ensure_finite("line origin x", origin.x)?;
        ensure_finite("line origin y", origin.y)?;
        ensure_finite("line end x", end.x)?;
        ensure_finite("line end y", end.y)?;
        Ok(Self { origin, end })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        point::distance(&self.origin, &self.end)
    }
}

impl Curve for Line {
    fn start_point(&self) -> Point2 {
        self.origin
    }

    fn end_point(&self) -> Point2 {
        self.end
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_endpoints() {
        let line = Line::new(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0)).unwrap();
        assert_eq!(line.origin(), &Point2::new(1.0, 2.0));
        assert_eq!(line.end(), &Point2::new(4.0, 6.0));
        assert!((line.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn nan_coordinate_returns_error() {
        assert!(Line::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 0.0)).is_err());
        assert!(Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, f64::INFINITY)).is_err());
    }
}
