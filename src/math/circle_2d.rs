use super::Point2;

/// Places a point on a circle of `radius` around `center` at angle `theta`.
///
/// Uses the screen-space convention `(cx + r*sin(theta), cy + r*cos(theta))`,
/// so `theta = pi` lands on the top edge of a canvas whose y axis grows
/// downward. NaN or infinite inputs are not guarded against and propagate
/// into the result.
#[must_use]
pub fn point_at_angle(center: Point2, radius: f64, theta: f64) -> Point2 {
    Point2::new(
        center.x + radius * theta.sin(),
        center.y + radius * theta.cos(),
    )
}

/// Wraps a possibly-negative index into `0..n` for closed-loop traversal.
///
/// `n` must be non-zero.
#[must_use]
pub fn wrap_index(index: isize, n: usize) -> usize {
    let n = n as isize;
    (((index % n) + n) % n) as usize
}

/// Linear blend between `a` and `b` at parameter `t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn point_at_angle_top_of_canvas() {
        let center = Point2::new(50.0, 50.0);
        let p = point_at_angle(center, 50.0, PI);
        assert!((p.x - 50.0).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
    }

    #[test]
    fn point_at_angle_quarter_turns() {
        let center = Point2::new(50.0, 50.0);
        let left = point_at_angle(center, 50.0, PI + FRAC_PI_2);
        assert!(left.x.abs() < TOLERANCE);
        assert!((left.y - 50.0).abs() < TOLERANCE);

        let bottom = point_at_angle(center, 50.0, 2.0 * PI);
        assert!((bottom.x - 50.0).abs() < TOLERANCE);
        assert!((bottom.y - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_at_angle_zero_radius() {
        let center = Point2::new(3.0, 4.0);
        let p = point_at_angle(center, 0.0, 1.234);
        assert!((p.x - 3.0).abs() < TOLERANCE);
        assert!((p.y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn wrap_index_in_range() {
        assert_eq!(wrap_index(0, 4), 0);
        assert_eq!(wrap_index(3, 4), 3);
    }

    #[test]
    fn wrap_index_negative() {
        assert_eq!(wrap_index(-1, 4), 3);
        assert_eq!(wrap_index(-5, 4), 3);
    }

    #[test]
    fn wrap_index_past_end() {
        assert_eq!(wrap_index(4, 4), 0);
        assert_eq!(wrap_index(9, 4), 1);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < TOLERANCE);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < TOLERANCE);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < TOLERANCE);
    }
}
