use thiserror::Error;

/// Top-level error type for the polyform outline engine.
#[derive(Debug, Error)]
pub enum PolyformError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Smoothing(#[from] SmoothingError),
}

/// Errors related to shape generation.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("a closed outline needs at least {min} sides, got {got}")]
    TooFewSides { got: usize, min: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate canvas: {0}")]
    Degenerate(String),
}

/// Errors related to spline smoothing.
#[derive(Debug, Error)]
pub enum SmoothingError {
    #[error("closed-loop interpolation needs at least {min} control points, got {got}")]
    InsufficientControlPoints { got: usize, min: usize },

    #[error("invalid smoothing parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolyformError`].
pub type Result<T> = std::result::Result<T, PolyformError>;
