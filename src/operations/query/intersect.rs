use crate::geometry::{Arc, Circle, Line, Path};
use crate::log::{debug, warn};
use crate::math::arc_2d::angles_within_arc;
use crate::math::intersect_2d::{
    circle_circle_intersect_2d, line_circle_intersect_2d, line_line_intersect_2d,
};
use crate::math::Point2;

/// Result of intersecting two paths.
///
/// `angles1` / `angles2` are present when the first / second path is a
/// circle or arc. They hold, for each point in order, the angle in degrees
/// at which that point sits on the path's own circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// The intersection points.
    pub points: Vec<Point2>,
    /// Angles on the first path, if it is a circle or arc.
    pub angles1: Option<Vec<f64>>,
    /// Angles on the second path, if it is a circle or arc.
    pub angles2: Option<Vec<f64>>,
}

impl Intersection {
    fn points_only(points: Vec<Point2>) -> Option<Self> {
        (!points.is_empty()).then_some(Self {
            points,
            angles1: None,
            angles2: None,
        })
    }

    /// The same intersection seen from the other path.
    fn swapped(self) -> Self {
        Self {
            points: self.points,
            angles1: self.angles2,
            angles2: self.angles1,
        }
    }

    fn has_nan(&self) -> bool {
        self.points.iter().any(|p| p.x.is_nan() || p.y.is_nan())
            || self
                .angles1
                .iter()
                .chain(self.angles2.iter())
                .flatten()
                .any(|a| a.is_nan())
    }
}

/// Computes the intersection of two paths.
///
/// With `deep`, touches at segment endpoints, arc ends and tangencies are
/// not reported.
pub struct PathIntersect<'a> {
    path1: &'a Path,
    path2: &'a Path,
    deep: bool,
}

impl<'a> PathIntersect<'a> {
    /// Creates a new `PathIntersect` query.
    #[must_use]
    pub fn new(path1: &'a Path, path2: &'a Path) -> Self {
        Self {
            path1,
            path2,
            deep: false,
        }
    }

    /// Only report intersections strictly interior to both paths.
    #[must_use]
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Executes the query. `None` when the paths do not intersect, or the
    /// intersection is not a finite set of points.
    #[must_use]
    pub fn execute(&self) -> Option<Intersection> {
        let deep = self.deep;
        debug!(
            path1 = ?self.path1.kind(),
            path2 = ?self.path2.kind(),
            deep,
            "intersect"
        );
        let result = match (self.path1, self.path2) {
            (Path::Line(a), Path::Line(b)) => line_line(a, b, deep),
            (Path::Line(line), Path::Circle(circle)) => {
                circle_line(circle, line, deep).map(Intersection::swapped)
            }
            (Path::Line(line), Path::Arc(arc)) => arc_line(arc, line, deep).map(Intersection::swapped),
            (Path::Circle(circle), Path::Line(line)) => circle_line(circle, line, deep),
            (Path::Circle(a), Path::Circle(b)) => circle_circle(a, b, deep),
            (Path::Circle(circle), Path::Arc(arc)) => {
                arc_circle(arc, circle, deep).map(Intersection::swapped)
            }
            (Path::Arc(arc), Path::Line(line)) => arc_line(arc, line, deep),
            (Path::Arc(arc), Path::Circle(circle)) => arc_circle(arc, circle, deep),
            (Path::Arc(a), Path::Arc(b)) => arc_arc(a, b, deep),
        };

        result.filter(|r| {
            if r.has_nan() {
                warn!(?r, "intersection produced NaN, discarding");
                false
            } else {
                true
            }
        })
    }
}

/// Shorthand for [`PathIntersect`].
#[must_use]
pub fn intersect(path1: &Path, path2: &Path, deep: bool) -> Option<Intersection> {
    PathIntersect::new(path1, path2).deep(deep).execute()
}

fn line_line(a: &Line, b: &Line, deep: bool) -> Option<Intersection> {
    Intersection::points_only(line_line_intersect_2d(a.origin(), a.end(), b.origin(), b.end(), deep))
}

fn circle_line(circle: &Circle, line: &Line, deep: bool) -> Option<Intersection> {
    let angles = line_circle_intersect_2d(line.origin(), line.end(), circle.origin(), circle.radius(), deep);
    on_first(circle, angles, None)
}

fn arc_line(arc: &Arc, line: &Line, deep: bool) -> Option<Intersection> {
    let angles = line_circle_intersect_2d(line.origin(), line.end(), arc.origin(), arc.radius(), deep);
    let angles = angles_within_arc(&angles, arc.start_angle(), arc.end_angle(), deep)?;
    on_first(&arc.circle(), angles, None)
}

fn circle_circle(a: &Circle, b: &Circle, deep: bool) -> Option<Intersection> {
    let pairs = circle_circle_intersect_2d(a.origin(), a.radius(), b.origin(), b.radius(), deep);
    let (angles1, angles2) = pairs.into_iter().unzip();
    on_first(a, angles1, Some(angles2))
}

/// Keeps the angle pairs whose first angle lies on the arc.
fn arc_circle(arc: &Arc, circle: &Circle, deep: bool) -> Option<Intersection> {
    let pairs = circle_circle_intersect_2d(arc.origin(), arc.radius(), circle.origin(), circle.radius(), deep);
    let (angles1, angles2) = pairs
        .into_iter()
        .filter(|&(a, _)| arc.contains_angle(a, deep))
        .unzip();
    on_first(&arc.circle(), angles1, Some(angles2))
}

/// Keeps the angle pairs that lie on both arcs.
fn arc_arc(a: &Arc, b: &Arc, deep: bool) -> Option<Intersection> {
    let pairs = circle_circle_intersect_2d(a.origin(), a.radius(), b.origin(), b.radius(), deep);
    let (angles1, angles2) = pairs
        .into_iter()
        .filter(|&(a1, a2)| a.contains_angle(a1, deep) && b.contains_angle(a2, deep))
        .unzip();
    on_first(&a.circle(), angles1, Some(angles2))
}

/// Builds a result whose points are placed on `circle` at `angles1`.
fn on_first(circle: &Circle, angles1: Vec<f64>, angles2: Option<Vec<f64>>) -> Option<Intersection> {
    if angles1.is_empty() {
        return None;
    }
    Some(Intersection {
        points: angles1.iter().map(|&a| circle.point_at(a)).collect(),
        angles1: Some(angles1),
        angles2,
    })
}
