//! Closed-form intersection of the three path primitives.
//!
//! Each solver canonicalizes its inputs (translate, then rotate so the
//! problem becomes axis-aligned), solves there, and maps answers back.
//! Angles are degrees on the caller's circle, snapped to [`ANGLE_ACCURACY`].
//! `exclusive` drops touches at segment endpoints and tangencies.

use crate::log::debug;

use super::{
    angle, is_between, point, round, round_default, solvers, Point2, ANGLE_ACCURACY,
};

/// Slope-intercept form of a non-vertical line.
#[derive(Debug, Clone, Copy)]
struct Slope {
    slope: f64,
    y_intercept: f64,
}

/// `None` for vertical lines.
#[allow(clippy::float_cmp)]
fn slope_of(origin: &Point2, end: &Point2) -> Option<Slope> {
    let dx = round_default(end.x - origin.x);
    if dx == 0.0 {
        return None;
    }
    let dy = round_default(end.y - origin.y);
    let slope = dy / dx;
    Some(Slope {
        slope,
        y_intercept: origin.y - slope * origin.x,
    })
}

#[allow(clippy::float_cmp)]
fn same_value(a: f64, b: f64) -> bool {
    round_default(a) == round_default(b)
}

#[allow(clippy::float_cmp)]
fn same_point(a: &Point2, b: &Point2) -> bool {
    same_value(a.x, b.x) && same_value(a.y, b.y)
}

/// Whether `p` lies in the bounding span of the segment `a0`-`a1`.
///
/// When `exclusive`, the segment's own endpoints are rejected.
fn is_between_points(p: &Point2, a0: &Point2, a1: &Point2, exclusive: bool) -> bool {
    let q = point::rounded(p, super::ROUND_ACCURACY);
    let lo = point::rounded(a0, super::ROUND_ACCURACY);
    let hi = point::rounded(a1, super::ROUND_ACCURACY);
    let inside = is_between(q.x, lo.x, hi.x, false) && is_between(q.y, lo.y, hi.y, false);
    inside && !(exclusive && (same_point(p, a0) || same_point(p, a1)))
}

/// Intersection of the segments `a0`-`a1` and `b0`-`b1`.
///
/// Returns one point for a crossing, up to two points (the extremities of
/// the shared span) for overlapping collinear segments, and nothing for
/// parallel or disjoint segments.
#[must_use]
pub fn line_line_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    exclusive: bool,
) -> Vec<Point2> {
    let p = match (slope_of(a0, a1), slope_of(b0, b1)) {
        (None, None) => {
            if same_value(a0.x, b0.x) {
                return collinear_overlap(a0, a1, b0, b1, exclusive);
            }
            debug!("line-line: distinct vertical lines");
            return Vec::new();
        }
        (Some(s1), Some(s2)) if same_value(s1.slope, s2.slope) => {
            if same_value(s1.y_intercept, s2.y_intercept) {
                return collinear_overlap(a0, a1, b0, b1, exclusive);
            }
            debug!("line-line: parallel lines");
            return Vec::new();
        }
        (None, Some(s)) => Point2::new(a0.x, s.slope * a0.x + s.y_intercept),
        (Some(s), None) => Point2::new(b0.x, s.slope * b0.x + s.y_intercept),
        (Some(s1), Some(s2)) => {
            let x = (s2.y_intercept - s1.y_intercept) / (s1.slope - s2.slope);
            Point2::new(x, s1.slope * x + s1.y_intercept)
        }
    };

    if is_between_points(&p, a0, a1, exclusive) && is_between_points(&p, b0, b1, exclusive) {
        vec![p]
    } else {
        Vec::new()
    }
}

/// Extremities of the span shared by two collinear segments.
fn collinear_overlap(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    exclusive: bool,
) -> Vec<Point2> {
    let mut candidates: Vec<Point2> = Vec::with_capacity(4);
    let inside_a = [b0, b1].into_iter().filter(|p| is_between_points(p, a0, a1, exclusive));
    let inside_b = [a0, a1].into_iter().filter(|p| is_between_points(p, b0, b1, exclusive));
    for p in inside_a.chain(inside_b) {
        if !candidates.iter().any(|c| same_point(c, p)) {
            candidates.push(*p);
        }
    }
    let ordered = order_along(candidates, a0, a1);
    if ordered.len() <= 2 {
        return ordered;
    }
    vec![ordered[0], ordered[ordered.len() - 1]]
}

/// Sorts points by their projection on the direction `from` -> `to`.
fn order_along(mut points: Vec<Point2>, from: &Point2, to: &Point2) -> Vec<Point2> {
    let dir = to - from;
    points.sort_by(|p, q| (p - from).dot(&dir).total_cmp(&(q - from).dot(&dir)));
    points
}

/// Angles (degrees, on the circle) where the segment `l0`-`l1` meets the
/// circle of `radius` around `center`.
///
/// The segment is moved so the circle sits at the origin and rotated to be
/// horizontal; its height is then compared to the radius.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_circle_intersect_2d(
    l0: &Point2,
    l1: &Point2,
    center: &Point2,
    radius: f64,
    exclusive: bool,
) -> Vec<f64> {
    let radius = round_default(radius);

    let line_angle = {
        let a = angle::normalize(angle::of_point_in_degrees(l0, l1));
        if a >= 180.0 {
            a - 360.0
        } else {
            a
        }
    };
    let zero = Point2::origin();
    let start = point::rotate(&Point2::from(l0 - center), -line_angle, &zero);
    let end = point::rotate(&Point2::from(l1 - center), -line_angle, &zero);
    let unrotate = |a: f64| snap_angle(a + line_angle);

    let line_y = round_default(start.y);
    let (x0, x1) = (round_default(start.x), round_default(end.x));

    if line_y.abs() > radius {
        debug!(line_y, radius, "line-circle: line misses circle");
        return Vec::new();
    }

    if line_y.abs() == radius {
        if exclusive || !is_between(0.0, x0, x1, false) {
            return Vec::new();
        }
        let apex = if line_y > 0.0 { 90.0 } else { 270.0 };
        return vec![unrotate(apex)];
    }

    let radians = (line_y / radius).asin();
    let degrees = angle::to_degrees(radians);
    let x = round_default(radians.cos() * radius);

    [(-x, 180.0 - degrees), (x, degrees)]
        .into_iter()
        .filter(|&(cx, _)| is_between(cx, x0, x1, exclusive))
        .map(|(_, a)| unrotate(a))
        .collect()
}

/// Normalizes to `[0, 360)` and snaps to [`ANGLE_ACCURACY`]. Snapping can
/// land on 360, which wraps back to 0.
fn snap_angle(angle_in_degrees: f64) -> f64 {
    angle::normalize(round(angle::normalize(angle_in_degrees), ANGLE_ACCURACY))
}

/// Intersection of two circles as pairs of angles `(on circle 1, on circle 2)`.
///
/// Circle 1 is moved to the origin and circle 2 rotated onto the positive
/// x axis at distance `x`. Identical circles have no enumerable
/// intersection and yield nothing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn circle_circle_intersect_2d(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
    exclusive: bool,
) -> Vec<(f64, f64)> {
    if r1 == r2 && c1 == c2 {
        debug!("circle-circle: identical circles");
        return Vec::new();
    }

    let offset = c2 - c1;
    let c2_angle = angle::of_point_in_degrees(&Point2::origin(), &Point2::from(offset));
    let x = round_default(offset.norm());
    let unrotate = |a: f64| snap_angle(a + c2_angle);

    // Radius sums and differences are compared on the rounding grid.
    let r1_grid = round_default(r1);
    let beyond = round_default(x - r2);
    let reach = round_default(x + r2);
    let overhang = round_default(r2 - x);

    if beyond > r1_grid {
        debug!(x, r1, r2, "circle-circle: separated");
        return Vec::new();
    }
    if reach < r1_grid {
        debug!(x, r1, r2, "circle-circle: circle 2 inside circle 1");
        return Vec::new();
    }
    if overhang > r1_grid {
        debug!(x, r1, r2, "circle-circle: circle 1 inside circle 2");
        return Vec::new();
    }

    // Interior tangency, circle 1 inside circle 2.
    if overhang == r1_grid {
        return if exclusive {
            Vec::new()
        } else {
            vec![(unrotate(180.0), unrotate(180.0))]
        };
    }
    // Interior tangency, circle 2 inside circle 1.
    if reach == r1_grid {
        return if exclusive {
            Vec::new()
        } else {
            vec![(unrotate(0.0), unrotate(0.0))]
        };
    }
    // Exterior tangency.
    if beyond == r1_grid {
        return if exclusive {
            Vec::new()
        } else {
            vec![(unrotate(0.0), unrotate(180.0))]
        };
    }

    let a1 = solvers::solve_sss(r2, r1, x);
    let a2 = 180.0 - solvers::solve_sss(r1, x, r2);
    vec![
        (unrotate(a1), unrotate(a2)),
        (
            unrotate(angle::mirror(a1, false, true)),
            unrotate(angle::mirror(a2, false, true)),
        ),
    ]
}
