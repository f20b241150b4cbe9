use crate::math::Point3;

use super::SphereShape;

/// Accept/reject test for sampled points.
///
/// The slice and column hooks let a caller skip whole runs of candidates
/// before sampling them. Implementations must only reject a slice or column
/// when every point in it would also fail [`Predicate::contains`].
pub trait Predicate {
    /// Returns `true` if `point` belongs to the shape.
    fn contains(&self, point: &Point3) -> bool;

    /// Returns `true` if no point with this X coordinate can be accepted.
    fn rejects_slice(&self, _x: f64) -> bool {
        false
    }

    /// Returns `true` if no point with these X and Y coordinates can be accepted.
    fn rejects_column(&self, _x: f64, _y: f64) -> bool {
        false
    }
}

/// Accepts every point; boxes are sampled without masking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Predicate for AcceptAll {
    fn contains(&self, _point: &Point3) -> bool {
        true
    }
}

/// Keeps points whose squared distance to the center is at most `r^2`.
#[derive(Debug, Clone, Copy)]
pub struct SphereMask {
    center: Point3,
    radius_sq: f64,
}

impl SphereMask {
    /// Creates a mask for `sphere`.
    #[must_use]
    pub fn new(sphere: &SphereShape) -> Self {
        Self {
            center: sphere.center,
            radius_sq: sphere.radius * sphere.radius,
        }
    }
}

impl Predicate for SphereMask {
    fn contains(&self, point: &Point3) -> bool {
        let d = point - self.center;
        d.x * d.x + d.y * d.y + d.z * d.z <= self.radius_sq
    }

    // Partial sums of squares never exceed the full sum in floating point,
    // so these comparisons cannot reject a point `contains` would accept.
    fn rejects_slice(&self, x: f64) -> bool {
        let dx = x - self.center.x;
        dx * dx > self.radius_sq
    }

    fn rejects_column(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy > self.radius_sq
    }
}
