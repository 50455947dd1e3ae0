use thiserror::Error;

/// Top-level error type for the path kernel.
///
/// Intersection and measurement never fail; errors only come from building
/// paths or transforming them into something invalid.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to path construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to path operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`GeometryError::NonFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_message_names_parameter() {
        let err = ensure_finite("radius", f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "radius must be finite, got NaN");
    }

    #[test]
    fn finite_value_passes_through() {
        assert!(matches!(ensure_finite("x", 2.5), Ok(v) if (v - 2.5).abs() < f64::EPSILON));
    }
}
