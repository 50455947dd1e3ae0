use nalgebra::Rotation2;

use super::{angle, round, Point2};
use crate::geometry::Arc;

/// Point at polar coordinates around the origin.
#[must_use]
pub fn from_polar(angle_in_radians: f64, radius: f64) -> Point2 {
    Point2::new(radius * angle_in_radians.cos(), radius * angle_in_radians.sin())
}

/// Point on a circle of `radius` around `center` at an angle in degrees.
#[must_use]
pub fn on_circle(center: &Point2, radius: f64, angle_in_degrees: f64) -> Point2 {
    center + from_polar(angle::to_radians(angle_in_degrees), radius).coords
}

/// Start and end points of an arc.
#[must_use]
pub fn from_arc(arc: &Arc) -> [Point2; 2] {
    [arc.start_angle(), arc.end_angle()].map(|a| on_circle(arc.origin(), arc.radius(), a))
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Rotates `p` counter-clockwise about `about` by an angle in degrees.
#[must_use]
pub fn rotate(p: &Point2, angle_in_degrees: f64, about: &Point2) -> Point2 {
    let rotation = Rotation2::new(angle::to_radians(angle_in_degrees));
    about + rotation * (p - about)
}

/// Negates x when `mirror_x`, y when `mirror_y`.
#[must_use]
pub fn mirror(p: &Point2, mirror_x: bool, mirror_y: bool) -> Point2 {
    Point2::new(
        if mirror_x { -p.x } else { p.x },
        if mirror_y { -p.y } else { p.y },
    )
}

/// Rounds both coordinates onto the `accuracy` grid.
#[must_use]
pub fn rounded(p: &Point2, accuracy: f64) -> Point2 {
    Point2::new(round(p.x, accuracy), round(p.y, accuracy))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn polar_right_angle() {
        let p = from_polar(std::f64::consts::FRAC_PI_2, 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn on_circle_offsets_center() {
        let p = on_circle(&Point2::new(1.0, 1.0), 5.0, 180.0);
        assert_abs_diff_eq!(p.x, -4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_and_polar_are_inverse() {
        let center = Point2::new(2.0, -3.0);
        for deg in [0.0, 30.0, 135.0, 200.0, 315.0] {
            let p = on_circle(&center, 4.0, deg);
            assert_abs_diff_eq!(angle::of_point_in_degrees(&center, &p), deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn distance_three_four_five() {
        assert_abs_diff_eq!(distance(&Point2::new(1.0, 1.0), &Point2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn rotate_quarter_turn_about_point() {
        let p = rotate(&Point2::new(2.0, 1.0), 90.0, &Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_negates_selected_axes() {
        let p = mirror(&Point2::new(3.0, -2.0), true, false);
        assert_abs_diff_eq!(p.x, -3.0);
        assert_abs_diff_eq!(p.y, -2.0);
        let q = mirror(&p, true, true);
        assert_abs_diff_eq!(q.x, 3.0);
        assert_abs_diff_eq!(q.y, 2.0);
    }

    #[test]
    fn arc_endpoints_from_angles() {
        let arc = Arc::new(Point2::new(1.0, 1.0), 2.0, 0.0, 90.0).unwrap_or_else(|e| panic!("{e}"));
        let [start, end] = from_arc(&arc);
        assert_abs_diff_eq!(start.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 3.0, epsilon = 1e-12);
    }
}
