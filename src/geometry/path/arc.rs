use crate::error::{ensure_finite, Result};
use crate::math::{angle, arc_2d, point, Point2};

use super::circle::check_radius;
use super::{Circle, Curve};

/// A circular arc.
///
/// Sweeps counter-clockwise from `start_angle` to `end_angle`, in degrees.
/// The angles are stored as given: an `end_angle` below `start_angle` is a
/// sweep across 0°, and negative angles are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub(crate) origin: Point2,
    pub(crate) radius: f64,
    pub(crate) start_angle: f64,
    pub(crate) end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `origin` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in degrees
    /// * `end_angle` - End angle in degrees
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive or any value
    /// is not finite.
    pub fn new(origin: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        ensure_finite("arc origin x", origin.x)?;
        ensure_finite("arc origin y", origin.y)?;
        check_radius(radius)?;
        ensure_finite("arc start angle", start_angle)?;
        ensure_finite("arc end angle", end_angle)?;
        Ok(Self {
            origin,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in degrees, as stored.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the end angle pushed past the start angle.
    #[must_use]
    pub fn end_angle_unwrapped(&self) -> f64 {
        angle::arc_end_unwrapped(self.start_angle, self.end_angle)
    }

    /// Returns the swept angle in degrees.
    #[must_use]
    pub fn span(&self) -> f64 {
        arc_2d::arc_span(self.start_angle, self.end_angle)
    }

    /// Whether an angle (degrees) lies on the arc. Endpoints count unless
    /// `exclusive`.
    #[must_use]
    pub fn contains_angle(&self, angle_in_degrees: f64, exclusive: bool) -> bool {
        arc_2d::is_within_arc(angle_in_degrees, self.start_angle, self.end_angle, exclusive)
    }

    /// The full circle this arc lies on.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle {
            origin: self.origin,
            radius: self.radius,
        }
    }

    /// Point on the arc's circle at an angle in degrees.
    #[must_use]
    pub fn point_at(&self, angle_in_degrees: f64) -> Point2 {
        point::on_circle(&self.origin, self.radius, angle_in_degrees)
    }

    /// Returns the start and end points.
    #[must_use]
    pub fn endpoints(&self) -> [Point2; 2] {
        point::from_arc(self)
    }

    /// Returns the arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.circle().length() * self.span() / 360.0
    }
}

impl Curve for Arc {
    fn start_point(&self) -> Point2 {
        self.point_at(self.start_angle)
    }

    fn end_point(&self) -> Point2 {
        self.point_at(self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.span() - 360.0).abs() < crate::math::ROUND_ACCURACY
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn endpoints_of_quarter_arc() {
        let arc = Arc::new(Point2::new(1.0, 0.0), 2.0, 0.0, 90.0).unwrap();
        let [start, end] = arc.endpoints();
        assert_abs_diff_eq!(start.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn wrapped_arc_span_and_length() {
        let arc = Arc::new(Point2::origin(), 1.0, 270.0, 90.0).unwrap();
        assert_abs_diff_eq!(arc.end_angle_unwrapped(), 450.0);
        assert_abs_diff_eq!(arc.span(), 180.0);
        assert_abs_diff_eq!(arc.length(), PI, epsilon = 1e-12);
        assert!(arc.contains_angle(0.0, false));
        assert!(!arc.contains_angle(180.0, false));
    }

    #[test]
    fn full_turn_arc_is_closed() {
        assert!(Arc::new(Point2::origin(), 1.0, 30.0, 390.0).unwrap().is_closed());
        assert!(!Arc::new(Point2::origin(), 1.0, 30.0, 60.0).unwrap().is_closed());
    }

    #[test]
    fn zero_radius_returns_error() {
        assert!(Arc::new(Point2::origin(), 0.0, 0.0, 90.0).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, f64::NAN, 90.0).is_err());
    }
}
