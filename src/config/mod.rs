//! Job files.
//!
//! A job is a TOML document with one `[[region]]` table per region:
//!
//! ```toml
//! output = "geo.k"
//!
//! [[region]]
//! name = "plate"
//! method = "sph"
//! density = 7.8
//! part_id = 5000001
//! start_nid = 5000001
//! start_eid = 5000001
//! shape = { kind = "box", min = [-2.54, -2.54, -0.635], max = [2.54, 2.54, 0.0] }
//! resolution = { counts = [111, 111, 14] }
//!
//! [[region]]
//! name = "projectile"
//! method = "sph"
//! density = 7.8
//! part_id = 1
//! start_nid = 1
//! start_eid = 1
//! shape = { kind = "sphere", center = [0.0, 0.0, 0.251], radius = 0.25 }
//! resolution = { counts = [11, 11, 11] }
//! ```

mod validate;

pub use validate::ResolvedRegion;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::{BoxShape, Shape, SphereShape};
use crate::math::Point3;

/// Discretization method of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Hexahedral solid elements on a node lattice.
    Fem,
    /// One particle per accepted cell center.
    Sph,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Fem => f.write_str("fem"),
            Method::Sph => f.write_str("sph"),
        }
    }
}

/// Geometry of a region as written in the job file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeConfig {
    Box { min: [f64; 3], max: [f64; 3] },
    Sphere { center: [f64; 3], radius: f64 },
}

impl ShapeConfig {
    /// Converts to the geometric shape, without validation.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        match *self {
            ShapeConfig::Box { min, max } => {
                Shape::Box(BoxShape::new(Point3::from(min), Point3::from(max)))
            }
            ShapeConfig::Sphere { center, radius } => {
                Shape::Sphere(SphereShape::new(Point3::from(center), radius))
            }
        }
    }
}

/// How finely a region is divided.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Element (FEM) or particle (SPH) counts per axis.
    Counts([usize; 3]),
    /// Target cell edge length; counts are `floor(extent / h)` per axis.
    CellSize(f64),
    /// Elements along the radius of an FEM sphere; the grid is `2N` per axis.
    Divisions(usize),
}

fn default_enabled() -> bool {
    true
}

/// Configuration of one region.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegionConfig {
    /// Name used in logs and diagnostics.
    pub name: String,
    /// Disabled regions are skipped entirely.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub method: Method,
    pub shape: ShapeConfig,
    pub resolution: Resolution,
    /// Material density. Required for SPH.
    #[serde(default)]
    pub density: Option<f64>,
    pub part_id: u32,
    pub start_nid: u32,
    pub start_eid: u32,
}

/// A complete generation job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobConfig {
    /// Default output path.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Regions in declaration order.
    #[serde(default, rename = "region")]
    pub regions: Vec<RegionConfig>,
}

impl JobConfig {
    /// Loads a job from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a job from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid job.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Validates every enabled region, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found.
    pub fn resolve(&self) -> Result<Vec<ResolvedRegion>> {
        self.regions
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.resolve().map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PrimeshError;

    const GEO: &str = r#"
output = "geo.k"

[[region]]
name = "plate"
method = "sph"
density = 7.8
part_id = 5000001
start_nid = 5000001
start_eid = 5000001
shape = { kind = "box", min = [-2.54, -2.54, -0.635], max = [2.54, 2.54, 0.0] }
resolution = { counts = [111, 111, 14] }

[[region]]
name = "projectile"
method = "fem"
enabled = false
part_id = 1
start_nid = 1
start_eid = 1
shape = { kind = "sphere", center = [0.0, 0.0, 0.251], radius = 0.25 }
resolution = { divisions = 10 }
"#;

    #[test]
    fn parse_job() {
        let job = JobConfig::parse(GEO).unwrap();
        assert_eq!(job.output, Some(PathBuf::from("geo.k")));
        assert_eq!(job.regions.len(), 2);

        let plate = &job.regions[0];
        assert_eq!(plate.method, Method::Sph);
        assert!(plate.enabled);
        assert_eq!(plate.density, Some(7.8));
        assert_eq!(plate.resolution, Resolution::Counts([111, 111, 14]));

        let projectile = &job.regions[1];
        assert!(!projectile.enabled);
        assert_eq!(projectile.density, None);
        assert_eq!(projectile.resolution, Resolution::Divisions(10));
        assert_eq!(
            projectile.shape,
            ShapeConfig::Sphere {
                center: [0.0, 0.0, 0.251],
                radius: 0.25
            }
        );
    }

    #[test]
    fn disabled_regions_are_skipped() {
        let job = JobConfig::parse(GEO).unwrap();
        let resolved = job.resolve().unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "plate");
    }

    #[test]
    fn cell_size_resolution() {
        let job = JobConfig::parse(
            r#"
[[region]]
name = "slab"
method = "fem"
part_id = 1
start_nid = 1
start_eid = 1
shape = { kind = "box", min = [0.0, 0.0, 0.0], max = [1.0, 0.5, 0.1] }
resolution = { cell_size = 0.05 }
"#,
        )
        .unwrap();
        assert_eq!(job.regions[0].resolution, Resolution::CellSize(0.05));
    }

    #[test]
    fn demo_job_resolves() {
        let job = JobConfig::parse(include_str!("../../demos/geo.toml")).unwrap();
        assert_eq!(job.regions.len(), 3);
        let resolved = job.resolve().unwrap();
        let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["plate", "projectile"]);
        assert_eq!(resolved[1].cells, crate::grid::GridDims::cubic(11));
    }

    #[test]
    fn malformed_job_is_a_config_error() {
        let err = JobConfig::parse("[[region]]\nname = 3").unwrap_err();
        assert!(matches!(err, PrimeshError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_shape_kind_rejected() {
        let err = JobConfig::parse(
            r#"
[[region]]
name = "c"
method = "fem"
part_id = 1
start_nid = 1
start_eid = 1
shape = { kind = "cylinder", radius = 1.0 }
resolution = { counts = [1, 1, 1] }
"#,
        );
        assert!(err.is_err());
    }
}
