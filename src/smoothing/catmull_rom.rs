use crate::math::{Point2, Vector2};

/// One cubic segment of a uniform Catmull-Rom spline.
///
/// Interpolates from `p1` to `p2`, with `p0` and `p3` shaping the
/// tangents:
///
/// ```text
/// p(t) = 0.5 * ( 2*p1
///              + (p2 - p0) * t
///              + (2*p0 - 5*p1 + 4*p2 - p3) * t^2
///              + (3*p1 - p0 - 3*p2 + p3) * t^3 )
/// ```
///
/// Polynomial coefficients are precomputed at construction.
#[derive(Debug, Clone, Copy)]
pub struct CatmullRomSegment {
    c0: Vector2,
    c1: Vector2,
    c2: Vector2,
    c3: Vector2,
}

impl CatmullRomSegment {
    /// Creates a segment from four consecutive control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        let (p0, p1, p2, p3) = (p0.coords, p1.coords, p2.coords, p3.coords);
        Self {
            c0: p1 * 2.0,
            c1: p2 - p0,
            c2: p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3,
            c3: p1 * 3.0 - p0 - p2 * 3.0 + p3,
        }
    }

    /// Evaluates the segment at parameter `t` in `[0, 1]`.
    ///
    /// The curve passes through `p1` at `t = 0` and `p2` at `t = 1`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let p = (self.c0 + self.c1 * t + self.c2 * (t * t) + self.c3 * (t * t * t)) * 0.5;
        Point2::from(p)
    }
}
