use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, ShapeError};
use crate::math::circle_2d::{lerp, point_at_angle};

use super::{CanvasFrame, Polygon};

/// Minimum number of sides for a generated outline.
pub const MIN_SIDES: usize = 4;

/// Angle of the first vertex. Under the `(sin, cos)` placement this is
/// the top of the canvas.
const START_ANGLE: f64 = std::f64::consts::PI;

/// How vertex radii are chosen during generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeMode {
    /// Every vertex at the nominal radius.
    Regular,
    /// Per-vertex radii drawn independently from
    /// `[radius * (1 - distortion), radius]`, with `distortion` in `[0, 1]`.
    Distorted { distortion: f64 },
}

/// Input configuration for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRequest {
    pub sides_count: usize,
    pub mode: ShapeMode,
}

impl ShapeRequest {
    /// Creates a request for a regular polygon.
    #[must_use]
    pub fn regular(sides_count: usize) -> Self {
        Self {
            sides_count,
            mode: ShapeMode::Regular,
        }
    }

    /// Creates a request for a randomly distorted blob.
    #[must_use]
    pub fn distorted(sides_count: usize, distortion: f64) -> Self {
        Self {
            sides_count,
            mode: ShapeMode::Distorted { distortion },
        }
    }
}

/// Generates a closed polygon or blob outline inscribed in a canvas.
///
/// Vertices sit on rays stepped by `2*pi / sides_count` starting from the
/// top of the canvas. Regular mode places all of them at the frame's
/// nominal radius and emits exactly `sides_count` vertices, closed
/// implicitly. Distorted mode walks one extra angular step so the loop
/// returns to the start ray, then pins the closing vertex to the first
/// one exactly, yielding `sides_count + 1` vertices.
pub struct GenerateShape {
    request: ShapeRequest,
    frame: CanvasFrame,
}

impl GenerateShape {
    /// Creates a new `GenerateShape` operation.
    #[must_use]
    pub fn new(request: ShapeRequest, frame: CanvasFrame) -> Self {
        Self { request, frame }
    }

    /// Executes the generation, drawing distorted radii from `rng`.
    ///
    /// Regular mode consumes no entropy and is fully deterministic in the
    /// request and frame. Distorted mode draws one uniform sample per
    /// vertex, so a seeded `rng` reproduces the same blob bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request has fewer than [`MIN_SIDES`] sides
    /// or a distortion outside `[0, 1]`.
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<Polygon> {
        let n = self.request.sides_count;
        if n < MIN_SIDES {
            return Err(ShapeError::TooFewSides {
                got: n,
                min: MIN_SIDES,
            }
            .into());
        }

        match self.request.mode {
            ShapeMode::Regular => Ok(self.regular(n)),
            ShapeMode::Distorted { distortion } => {
                if !(0.0..=1.0).contains(&distortion) {
                    return Err(ShapeError::ParameterOutOfRange {
                        parameter: "distortion",
                        value: distortion,
                        min: 0.0,
                        max: 1.0,
                    }
                    .into());
                }
                Ok(self.distorted(n, distortion, rng))
            }
        }
    }

    /// Executes the generation with a `StdRng` seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GenerateShape::execute`].
    pub fn execute_seeded(&self, seed: u64) -> Result<Polygon> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.execute(&mut rng)
    }

    fn regular(&self, n: usize) -> Polygon {
        let center = self.frame.center();
        let radius = self.frame.radius();
        let d_theta = std::f64::consts::TAU / n as f64;

        let mut vertices = Vec::with_capacity(n);
        vertices.push(point_at_angle(center, radius, START_ANGLE));
        for side in 0..n - 1 {
            let theta = START_ANGLE + side as f64 * d_theta;
            vertices.push(point_at_angle(center, radius, theta + d_theta));
        }
        Polygon::new(vertices)
    }

    fn distorted<R: Rng>(&self, n: usize, distortion: f64, rng: &mut R) -> Polygon {
        let center = self.frame.center();
        let radius = self.frame.radius();
        let d_theta = std::f64::consts::TAU / n as f64;

        let mut vertices = Vec::with_capacity(n + 1);
        vertices.push(point_at_angle(
            center,
            band_radius(radius, distortion, rng),
            START_ANGLE,
        ));
        for side in 0..n {
            let theta = START_ANGLE + side as f64 * d_theta;
            vertices.push(point_at_angle(
                center,
                band_radius(radius, distortion, rng),
                theta + d_theta,
            ));
        }
        // Independent radii would leave a seam at the wrap-around; pin the
        // closing vertex to the first one exactly.
        vertices[n] = vertices[0];
        Polygon::new(vertices)
    }
}

/// Draws one radius from `[radius * (1 - distortion), radius]`.
fn band_radius<R: Rng>(radius: f64, distortion: f64, rng: &mut R) -> f64 {
    lerp(radius, radius * (1.0 - distortion), rng.gen::<f64>())
}
