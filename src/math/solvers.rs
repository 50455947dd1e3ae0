//! Triangle solvers used to turn circle-distance relationships into angles.

use super::angle;

/// Angle (degrees) opposite `len_opposite` in a triangle with sides
/// `len_opposite`, `len_a` and `len_b`, by the law of cosines.
///
/// The sides must satisfy the triangle inequality; otherwise the result is
/// NaN. Callers guard against separated or nested circles before calling.
#[must_use]
pub fn solve_sss(len_opposite: f64, len_a: f64, len_b: f64) -> f64 {
    let cos = (len_a * len_a + len_b * len_b - len_opposite * len_opposite) / (2.0 * len_a * len_b);
    angle::to_degrees(cos.acos())
}

/// Length of the side opposite `opposite_angle` (degrees), given the side
/// between `opposite_angle` and `other_angle`, by the law of sines.
#[must_use]
pub fn solve_asa(opposite_angle: f64, side_between: f64, other_angle: f64) -> f64 {
    let angle_opposite_side = 180.0 - opposite_angle - other_angle;
    side_between * angle::to_radians(opposite_angle).sin()
        / angle::to_radians(angle_opposite_side).sin()
}
