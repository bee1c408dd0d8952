use crate::math::Point2;

/// A closed polygonal outline.
///
/// Vertices are ordered; the last vertex connects back to the first by
/// convention, with no explicit closing flag. Generators that randomize
/// per-vertex radii append an exact duplicate of the first vertex so the
/// seam stays closed; regular generation relies on implicit closure alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from ordered vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Number of segments in the closed loop (one per vertex).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vertices.len()
    }
}
