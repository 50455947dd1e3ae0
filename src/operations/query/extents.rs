use crate::geometry::{Arc, Model, Path};
use crate::log::debug;
use crate::math::{Point2, Vector2};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Minimum corner.
    pub low: Point2,
    /// Maximum corner.
    pub high: Point2,
}

impl Extents {
    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Extents) -> Extents {
        Extents {
            low: Point2::new(self.low.x.min(other.low.x), self.low.y.min(other.low.y)),
            high: Point2::new(self.high.x.max(other.high.x), self.high.y.max(other.high.y)),
        }
    }

    /// The box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Extents {
        Extents {
            low: self.low + offset,
            high: self.high + offset,
        }
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high.x - self.low.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.high.y - self.low.y
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.low, &self.high)
    }
}

/// Computes the bounding box of a single path, in the path's own frame.
pub struct PathExtents<'a> {
    path: &'a Path,
}

impl<'a> PathExtents<'a> {
    /// Creates a new `PathExtents` query.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Extents {
        match self.path {
            Path::Line(line) => Extents {
                low: line.origin().inf(line.end()),
                high: line.origin().sup(line.end()),
            },
            Path::Circle(circle) => {
                let r = Vector2::new(circle.radius(), circle.radius());
                Extents {
                    low: circle.origin() - r,
                    high: circle.origin() + r,
                }
            }
            Path::Arc(arc) => arc_extents(arc),
        }
    }
}

/// Chord endpoints, pushed out to the radius on each axis whose extreme
/// angle the arc sweeps through.
fn arc_extents(arc: &Arc) -> Extents {
    let [start, end] = arc.endpoints();
    let mut low = start.inf(&end);
    let mut high = start.sup(&end);
    let (c, r) = (arc.origin(), arc.radius());

    if arc.contains_angle(0.0, false) {
        high.x = c.x + r;
    }
    if arc.contains_angle(90.0, false) {
        high.y = c.y + r;
    }
    if arc.contains_angle(180.0, false) {
        low.x = c.x - r;
    }
    if arc.contains_angle(270.0, false) {
        low.y = c.y - r;
    }
    Extents { low, high }
}

/// Computes the bounding box of every path in a model tree, with each node's
/// origin applied to everything beneath it.
pub struct ModelExtents<'a> {
    model: &'a Model,
}

impl<'a> ModelExtents<'a> {
    /// Creates a new `ModelExtents` query.
    #[must_use]
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Executes the query. `None` when the tree holds no paths.
    #[must_use]
    pub fn execute(&self) -> Option<Extents> {
        let mut total: Option<Extents> = None;
        self.model.walk_paths(|_, path, offset| {
            let e = PathExtents::new(path).execute().translated(offset);
            total = Some(total.map_or(e, |t| t.union(&e)));
        });
        debug!(?total, "model extents");
        total
    }
}

/// Shorthand for [`PathExtents`].
#[must_use]
pub fn path_extents(path: &Path) -> Extents {
    PathExtents::new(path).execute()
}

/// Shorthand for [`ModelExtents`].
#[must_use]
pub fn model_extents(model: &Model) -> Option<Extents> {
    ModelExtents::new(model).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::{Circle, Line};

    fn assert_extents(e: &Extents, low: (f64, f64), high: (f64, f64)) {
        assert_abs_diff_eq!(e.low.x, low.0, epsilon = 1e-9);
        assert_abs_diff_eq!(e.low.y, low.1, epsilon = 1e-9);
        assert_abs_diff_eq!(e.high.x, high.0, epsilon = 1e-9);
        assert_abs_diff_eq!(e.high.y, high.1, epsilon = 1e-9);
    }

    #[test]
    fn line_extents_are_componentwise() {
        let line: Path = Line::new(Point2::new(4.0, -1.0), Point2::new(-2.0, 3.0)).unwrap().into();
        let e = path_extents(&line);
        assert_eq!(e.low, Point2::new(-2.0, -1.0));
        assert_eq!(e.high, Point2::new(4.0, 3.0));
    }

    #[test]
    fn circle_extents_span_the_diameter() {
        let circle: Path = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap().into();
        let e = path_extents(&circle);
        assert_eq!(e.width(), 6.0);
        assert_eq!(e.height(), 6.0);
        assert_eq!(e.center(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn quarter_arc_stays_within_its_chord_box() {
        let arc: Path = Arc::new(Point2::origin(), 2.0, 0.0, 90.0).unwrap().into();
        assert_extents(&path_extents(&arc), (0.0, 0.0), (2.0, 2.0));
    }

    #[test]
    fn arc_bulges_past_its_chord() {
        let arc: Path = Arc::new(Point2::origin(), 2.0, 45.0, 135.0).unwrap().into();
        let e = path_extents(&arc);
        let s = 2.0_f64.sqrt();
        assert_extents(&e, (-s, s), (s, 2.0));
    }

    #[test]
    fn arc_crossing_zero_reaches_positive_x() {
        let arc: Path = Arc::new(Point2::new(5.0, 5.0), 1.0, 270.0, 90.0).unwrap().into();
        assert_extents(&path_extents(&arc), (5.0, 4.0), (6.0, 6.0));
    }

    #[test]
    fn model_extents_apply_nested_origins() {
        let inner = Model::new()
            .with_origin(Point2::new(10.0, 0.0))
            .with_path("dot", Circle::new(Point2::origin(), 1.0).unwrap());
        let model = Model::new()
            .with_origin(Point2::new(0.0, 5.0))
            .with_path("base", Line::new(Point2::origin(), Point2::new(2.0, 0.0)).unwrap())
            .with_model("inner", inner);
        let e = model_extents(&model).unwrap();
        assert_extents(&e, (0.0, 4.0), (11.0, 6.0));
    }

    #[test]
    fn empty_model_has_no_extents() {
        assert!(model_extents(&Model::new()).is_none());
        let only_children = Model::new().with_model("empty", Model::new());
        assert!(ModelExtents::new(&only_children).execute().is_none());
    }
}
