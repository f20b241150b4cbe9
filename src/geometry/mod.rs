pub mod predicate;
pub mod sampler;

pub use predicate::{AcceptAll, Predicate, SphereMask};
pub use sampler::{BoxSampler, CubedSphereSampler, SampleMode, Sampler};

use crate::math::{Point3, Vector3};

/// An axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl BoxShape {
    /// Creates a new box from its two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.extent().product()
    }
}

/// A solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl SphereShape {
    /// Creates a new sphere.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The cube `[c - r, c + r]^3` enclosing the sphere.
    #[must_use]
    pub fn bounding_box(&self) -> BoxShape {
        let half = Vector3::repeat(self.radius);
        BoxShape::new(self.center - half, self.center + half)
    }

    /// Enclosed volume, `4/3 pi r^3`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }
}

/// The primitive a region discretizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box(BoxShape),
    Sphere(SphereShape),
}

impl Shape {
    /// Human-readable kind, used in logs and reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box(_) => "box",
            Shape::Sphere(_) => "sphere",
        }
    }
}
