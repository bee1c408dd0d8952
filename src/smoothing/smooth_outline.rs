use crate::error::{Result, SmoothingError};
use crate::math::circle_2d::wrap_index;
use crate::shape::Polygon;

use super::{CatmullRomSegment, Outline, SmoothingParams, MIN_CONTROL_POINTS};

/// Smooths a closed polygon into a dense Catmull-Rom outline.
pub struct SmoothOutline {
    params: SmoothingParams,
}

impl SmoothOutline {
    /// Creates a new `SmoothOutline` operation.
    #[must_use]
    pub fn new(params: SmoothingParams) -> Self {
        Self { params }
    }

    /// Executes the smoothing, returning a new outline.
    ///
    /// The polygon is treated as cyclic: segment `i` runs from vertex `i`
    /// to vertex `i + 1`, shaped by its wrap-around neighbours. Every
    /// original vertex is emitted exactly, followed by `granularity - 1`
    /// interior samples, so the output holds `n * granularity` points and
    /// the final segment leads back to the first point with no duplicate.
    /// A granularity of one returns the vertex sequence unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has fewer than
    /// [`MIN_CONTROL_POINTS`] vertices or the granularity is zero.
    pub fn execute(&self, polygon: &Polygon) -> Result<Outline> {
        let granularity = self.params.granularity;
        if granularity == 0 {
            return Err(SmoothingError::InvalidParameters(
                "granularity must be positive".to_owned(),
            )
            .into());
        }

        let vertices = &polygon.vertices;
        let n = vertices.len();
        if n < MIN_CONTROL_POINTS {
            return Err(SmoothingError::InsufficientControlPoints {
                got: n,
                min: MIN_CONTROL_POINTS,
            }
            .into());
        }

        let mut points = Vec::with_capacity(n * granularity as usize);
        for i in 0..polygon.segment_count() {
            let segment = CatmullRomSegment::new(
                vertices[wrap_index(i as isize - 1, n)],
                vertices[i],
                vertices[(i + 1) % n],
                vertices[(i + 2) % n],
            );
            points.push(vertices[i]);
            for k in 1..granularity {
                let t = f64::from(k) / f64::from(granularity);
                points.push(segment.point_at(t));
            }
        }
        Ok(Outline { points })
    }
}
