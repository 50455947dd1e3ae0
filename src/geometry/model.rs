use std::collections::BTreeMap;

use crate::math::{Point2, Vector2};
use crate::operations::transform::Translate;

use super::Path;

/// A tree of named paths and named sub-models.
///
/// Every node carries an `origin` that offsets everything beneath it, so a
/// path's absolute position is its own coordinates plus the sum of the
/// origins of all its ancestors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub origin: Point2,
    pub paths: BTreeMap<String, Path>,
    pub models: BTreeMap<String, Model>,
}

impl Model {
    /// Creates an empty model at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the origin offset of this node.
    #[must_use]
    pub fn with_origin(mut self, origin: Point2) -> Self {
        self.origin = origin;
        self
    }

    /// Adds (or replaces) a path under `id`.
    #[must_use]
    pub fn with_path(mut self, id: impl Into<String>, path: impl Into<Path>) -> Self {
        self.paths.insert(id.into(), path.into());
        self
    }

    /// Adds (or replaces) a sub-model under `id`.
    #[must_use]
    pub fn with_model(mut self, id: impl Into<String>, model: Model) -> Self {
        self.models.insert(id.into(), model);
        self
    }

    /// Visits every path in the tree, depth first, with the accumulated
    /// offset of its containing node.
    pub fn walk_paths<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Path, &Vector2),
    {
        self.walk_inner(&Vector2::zeros(), &mut visit);
    }

    fn walk_inner<F>(&self, offset: &Vector2, visit: &mut F)
    where
        F: FnMut(&str, &Path, &Vector2),
    {
        let offset = offset + self.origin.coords;
        for (id, path) in &self.paths {
            visit(id, path, &offset);
        }
        for model in self.models.values() {
            model.walk_inner(&offset, visit);
        }
    }

    /// Returns a copy with every path moved to absolute coordinates and
    /// every origin reset to zero.
    #[must_use]
    pub fn originate(&self) -> Model {
        self.originate_inner(&Vector2::zeros())
    }

    fn originate_inner(&self, offset: &Vector2) -> Model {
        let offset = offset + self.origin.coords;
        Model {
            origin: Point2::origin(),
            paths: self
                .paths
                .iter()
                .map(|(id, path)| (id.clone(), Translate::new(path, offset).execute()))
                .collect(),
            models: self
                .models
                .iter()
                .map(|(id, model)| (id.clone(), model.originate_inner(&offset)))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Line};

    fn nested() -> Model {
        let inner = Model::new()
            .with_origin(Point2::new(10.0, 0.0))
            .with_path("hole", Circle::new(Point2::new(1.0, 1.0), 0.5).unwrap());
        Model::new()
            .with_origin(Point2::new(0.0, 5.0))
            .with_path("edge", Line::new(Point2::origin(), Point2::new(2.0, 0.0)).unwrap())
            .with_model("inner", inner)
    }

    #[test]
    fn walk_accumulates_offsets() {
        let mut seen = Vec::new();
        nested().walk_paths(|id, _, offset| seen.push((id.to_owned(), *offset)));
        assert_eq!(
            seen,
            vec![
                ("edge".to_owned(), Vector2::new(0.0, 5.0)),
                ("hole".to_owned(), Vector2::new(10.0, 5.0)),
            ]
        );
    }

    #[test]
    fn originate_moves_paths_to_absolute() {
        let flat = nested().originate();
        assert_eq!(flat.origin, Point2::origin());
        let Path::Line(edge) = flat.paths["edge"] else {
            panic!("edge is not a line");
        };
        assert_eq!(edge.origin(), &Point2::new(0.0, 5.0));
        assert_eq!(edge.end(), &Point2::new(2.0, 5.0));
        let inner = &flat.models["inner"];
        assert_eq!(inner.origin, Point2::origin());
        let Path::Circle(hole) = inner.paths["hole"] else {
            panic!("hole is not a circle");
        };
        assert_eq!(hole.origin(), &Point2::new(11.0, 6.0));
    }
}
