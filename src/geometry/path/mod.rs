mod arc;
mod circle;
mod line;

pub use arc::Arc;
pub use circle::Circle;
pub use line::Line;

use crate::math::Point2;

/// Trait for the endpoints of a path.
pub trait Curve {
    /// Returns the point where the path starts.
    fn start_point(&self) -> Point2;

    /// Returns the point where the path ends.
    fn end_point(&self) -> Point2;

    /// Returns whether the path ends where it starts by construction.
    fn is_closed(&self) -> bool;
}

/// Discriminant of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Line,
    Circle,
    Arc,
}

/// One of the three path primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Path {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
}

impl Path {
    /// Returns the kind of this path.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self {
            Path::Line(_) => PathKind::Line,
            Path::Circle(_) => PathKind::Circle,
            Path::Arc(_) => PathKind::Arc,
        }
    }

    /// Returns the origin: a line's start point, or a circle's or arc's center.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        match self {
            Path::Line(line) => line.origin(),
            Path::Circle(circle) => circle.origin(),
            Path::Arc(arc) => arc.origin(),
        }
    }
}

impl Curve for Path {
    fn start_point(&self) -> Point2 {
        match self {
            Path::Line(line) => line.start_point(),
            Path::Circle(circle) => circle.start_point(),
            Path::Arc(arc) => arc.start_point(),
        }
    }

    fn end_point(&self) -> Point2 {
        match self {
            Path::Line(line) => line.end_point(),
            Path::Circle(circle) => circle.end_point(),
            Path::Arc(arc) => arc.end_point(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Path::Line(line) => line.is_closed(),
            Path::Circle(circle) => circle.is_closed(),
            Path::Arc(arc) => arc.is_closed(),
        }
    }
}

impl From<Line> for Path {
    fn from(line: Line) -> Self {
        Path::Line(line)
    }
}

impl From<Circle> for Path {
    fn from(circle: Circle) -> Self {
        Path::Circle(circle)
    }
}

impl From<Arc> for Path {
    fn from(arc: Arc) -> Self {
        Path::Arc(arc)
    }
}
