use crate::error::{Result, ShapeError};
use crate::math::{Point2, TOLERANCE};

/// The square drawing area a shape is inscribed in.
///
/// The nominal vertex radius is `size * radius_scale` around the canvas
/// center `(size/2, size/2)`. The default scale of `0.5` keeps a regular
/// shape's circumscribed circle inside the canvas; a scale of `1.0`
/// treats the full canvas size as the radius, the convention of callers
/// that rely on distortion to pull vertices back inward.
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    size: f64,
    radius_scale: f64,
}

impl CanvasFrame {
    /// Creates a frame with the default radius scale of `0.5`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive.
    pub fn new(size: f64) -> Result<Self> {
        Self::with_radius_scale(size, 0.5)
    }

    /// Creates a frame with an explicit radius scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive or `radius_scale` is
    /// outside `(0, 1]`.
    pub fn with_radius_scale(size: f64, radius_scale: f64) -> Result<Self> {
        if size < TOLERANCE {
            return Err(ShapeError::Degenerate("canvas size must be positive".into()).into());
        }
        if radius_scale < TOLERANCE || radius_scale > 1.0 {
            return Err(ShapeError::ParameterOutOfRange {
                parameter: "radius_scale",
                value: radius_scale,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(Self { size, radius_scale })
    }

    /// Side length of the square canvas.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Center of the canvas.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.size * 0.5, self.size * 0.5)
    }

    /// Nominal vertex radius (`size * radius_scale`).
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size * self.radius_scale
    }
}
