pub mod angle;
pub mod arc_2d;
pub mod intersect_2d;
pub mod point;
pub mod solvers;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default accuracy for [`round`]: coordinates, slopes and radii are
/// compared on this grid.
pub const ROUND_ACCURACY: f64 = 1e-7;

/// Accuracy used when snapping intersection angles back into the caller's
/// frame.
///
/// Coarser than [`ROUND_ACCURACY`] on purpose; the two are not
/// interchangeable.
pub const ANGLE_ACCURACY: f64 = 1e-4;

/// Snaps `n` to a decimal grid of spacing `accuracy`.
///
/// `round(3.14159, 0.001)` is `3.142`.
#[must_use]
pub fn round(n: f64, accuracy: f64) -> f64 {
    let places = 1.0 / accuracy;
    (n * places).round() / places
}

/// [`round`] with [`ROUND_ACCURACY`].
#[must_use]
pub fn round_default(n: f64) -> f64 {
    round(n, ROUND_ACCURACY)
}

/// Whether `value` lies between two limits given in either order.
///
/// Inclusive unless `exclusive`.
#[must_use]
pub fn is_between(value: f64, limit1: f64, limit2: f64, exclusive: bool) -> bool {
    let (lo, hi) = if limit1 <= limit2 {
        (limit1, limit2)
    } else {
        (limit2, limit1)
    };
    if exclusive {
        lo < value && value < hi
    } else {
        lo <= value && value <= hi
    }
}
