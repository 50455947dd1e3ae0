//! 2D arc angle utilities.
//!
//! Arcs sweep counter-clockwise from `start_angle` to `end_angle`, both in
//! degrees and not normalized. An `end_angle` below `start_angle` means the
//! sweep crosses 0°; see [`super::angle::arc_end_unwrapped`].

use super::{angle, is_between};

/// Total swept angle of an arc in degrees.
#[must_use]
pub fn arc_span(start_angle: f64, end_angle: f64) -> f64 {
    angle::arc_end_unwrapped(start_angle, end_angle) - start_angle
}

/// Whether `angle_in_degrees` lies on the arc's sweep.
///
/// Tested at three phase offsets (0, +360, -360) so that negative stored
/// angles and sweeps crossing 0° are handled. Endpoints count unless
/// `exclusive`.
#[must_use]
pub fn is_within_arc(angle_in_degrees: f64, start_angle: f64, end_angle: f64, exclusive: bool) -> bool {
    let end = angle::arc_end_unwrapped(start_angle, end_angle);
    [0.0, 360.0, -360.0].iter().any(|phase| {
        is_between(angle_in_degrees, start_angle + phase, end + phase, exclusive)
    })
}

/// Keeps the angles that lie on the arc. `None` when nothing survives.
#[must_use]
pub fn angles_within_arc(
    angles: &[f64],
    start_angle: f64,
    end_angle: f64,
    exclusive: bool,
) -> Option<Vec<f64>> {
    let within: Vec<f64> = angles
        .iter()
        .copied()
        .filter(|&a| is_within_arc(a, start_angle, end_angle, exclusive))
        .collect();
    (!within.is_empty()).then_some(within)
}
