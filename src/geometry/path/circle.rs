use std::f64::consts::PI;

use crate::error::{ensure_finite, GeometryError, Result};
use crate::math::{point, Point2};

use super::Curve;

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub(crate) origin: Point2,
    pub(crate) radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive or any value
    /// is not finite.
    pub fn new(origin: Point2, radius: f64) -> Result<Self> {
        ensure_finite("circle origin x", origin.x)?;
        ensure_finite("circle origin y", origin.y)?;
        check_radius(radius)?;
        Ok(Self { origin, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at an angle in degrees.
    #[must_use]
    pub fn point_at(&self, angle_in_degrees: f64) -> Point2 {
        point::on_circle(&self.origin, self.radius, angle_in_degrees)
    }

    /// Returns the circumference.
    #[must_use]
    pub fn length(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// Rejects non-finite and non-positive radii.
pub(crate) fn check_radius(radius: f64) -> Result<f64> {
    ensure_finite("radius", radius)?;
    if radius <= 0.0 {
        return Err(GeometryError::Degenerate(format!("radius must be positive, got {radius}")).into());
    }
    Ok(radius)
}

impl Curve for Circle {
    fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    fn end_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
