//! Angle conversions in the library's degree-based convention.
//!
//! Angles of points are measured counter-clockwise from the positive x axis
//! and reported in `[0, 360)` degrees (`[0, 2π)` radians), so that
//! [`of_point_in_degrees`] and [`super::point::from_polar`] invert each other.

use std::f64::consts::PI;

use super::Point2;

/// Reduces an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize(angle_in_degrees: f64) -> f64 {
    let revolutions = (angle_in_degrees / 360.0).floor();
    angle_in_degrees - 360.0 * revolutions
}

/// Converts degrees to radians. Exactly 360° maps to 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn to_radians(angle_in_degrees: f64) -> f64 {
    if angle_in_degrees == 360.0 {
        return 0.0;
    }
    angle_in_degrees * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn to_degrees(angle_in_radians: f64) -> f64 {
    angle_in_radians * 180.0 / PI
}

/// Angle of the ray from `origin` through `p`, in radians within `[0, 2π)`.
#[must_use]
pub fn of_point_in_radians(origin: &Point2, p: &Point2) -> f64 {
    let d = p - origin;
    (-d.y).atan2(-d.x) + PI
}

/// Angle of the ray from `origin` through `p`, in degrees.
#[must_use]
pub fn of_point_in_degrees(origin: &Point2, p: &Point2) -> f64 {
    to_degrees(of_point_in_radians(origin, p))
}

/// Mirrors an angle across the x and/or y axis.
///
/// `mirror_y` negates the y component (`360 - a`), then `mirror_x` negates
/// the x component (`180 - a`, kept positive).
#[must_use]
pub fn mirror(angle_in_degrees: f64, mirror_x: bool, mirror_y: bool) -> f64 {
    let mut angle = angle_in_degrees;
    if mirror_y {
        angle = 360.0 - angle;
    }
    if mirror_x {
        angle = if angle < 180.0 { 180.0 } else { 540.0 } - angle;
    }
    angle
}

/// End angle of an arc, pushed past the start angle when the sweep crosses
/// the 0°/360° boundary.
#[must_use]
pub fn arc_end_unwrapped(start_angle: f64, end_angle: f64) -> f64 {
    if end_angle < start_angle {
        end_angle + 360.0
    } else {
        end_angle
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn normalize_wraps_into_one_turn() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(-720.0), 0.0);
    }

    #[test]
    fn full_turn_is_zero_radians() {
        assert_eq!(to_radians(360.0), 0.0);
        assert_abs_diff_eq!(to_radians(180.0), PI);
        assert_abs_diff_eq!(to_degrees(PI / 2.0), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn point_angles_cover_all_quadrants() {
        let o = Point2::origin();
        assert_abs_diff_eq!(of_point_in_degrees(&o, &Point2::new(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(of_point_in_degrees(&o, &Point2::new(0.0, 1.0)), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(of_point_in_degrees(&o, &Point2::new(-1.0, 0.0)), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(of_point_in_degrees(&o, &Point2::new(0.0, -1.0)), 270.0, epsilon = 1e-12);
    }

    #[test]
    fn point_angle_is_relative_to_origin() {
        let a = of_point_in_degrees(&Point2::new(5.0, 5.0), &Point2::new(6.0, 6.0));
        assert_abs_diff_eq!(a, 45.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_each_axis() {
        assert_eq!(mirror(30.0, false, true), 330.0);
        assert_eq!(mirror(30.0, true, false), 150.0);
        assert_eq!(mirror(200.0, true, false), 340.0);
        assert_eq!(mirror(30.0, true, true), 210.0);
        assert_eq!(mirror(30.0, false, false), 30.0);
    }

    #[test]
    fn unwrapped_end_angle() {
        assert_eq!(arc_end_unwrapped(270.0, 90.0), 450.0);
        assert_eq!(arc_end_unwrapped(0.0, 90.0), 90.0);
        assert_eq!(arc_end_unwrapped(-45.0, 45.0), 45.0);
    }
}
