use crate::error::ConfigError;
use crate::geometry::Shape;
use crate::grid::GridDims;
use crate::keyword::{max_id, ID_WIDTH};

use super::{Method, RegionConfig, Resolution};

const AXES: [char; 3] = ['x', 'y', 'z'];

/// A validated region, ready for generation.
///
/// `cells` counts elements per axis for FEM and samples per axis for SPH.
/// For an FEM sphere it is always a cube with an even edge count.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRegion {
    pub name: String,
    pub method: Method,
    pub shape: Shape,
    pub cells: GridDims,
    pub density: Option<f64>,
    pub part_id: u32,
    pub start_nid: u32,
    pub start_eid: u32,
}

impl ResolvedRegion {
    /// Largest number of nodes the region can produce.
    #[must_use]
    pub fn node_capacity(&self) -> u64 {
        let dims = match self.method {
            Method::Fem => self.cells.nodes_of_cells(),
            Method::Sph => self.cells,
        };
        lattice_size(dims)
    }

    /// Largest number of elements or particles the region can produce.
    #[must_use]
    pub fn element_capacity(&self) -> u64 {
        lattice_size(self.cells)
    }
}

fn lattice_size(dims: GridDims) -> u64 {
    dims.as_array()
        .iter()
        .try_fold(1u64, |acc, &n| acc.checked_mul(n as u64))
        .unwrap_or(u64::MAX)
}

impl RegionConfig {
    /// Validates this region and resolves its grid.
    ///
    /// Masked sphere regions are checked against their full bounding grid,
    /// since the accepted count is only known after generation.
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive or non-finite parameters,
    /// degenerate extents, zero resolution, resolution modes the shape does
    /// not support, zero IDs, or IDs wider than the keyword ID column.
    pub fn resolve(&self) -> Result<ResolvedRegion, ConfigError> {
        let shape = self.shape.to_shape();
        self.check_shape(&shape)?;
        let density = self.check_density()?;
        let cells = self.resolve_cells(&shape)?;

        let region = ResolvedRegion {
            name: self.name.clone(),
            method: self.method,
            shape,
            cells,
            density,
            part_id: self.part_id,
            start_nid: self.start_nid,
            start_eid: self.start_eid,
        };
        self.check_ids(&region)?;
        Ok(region)
    }

    fn non_positive(&self, field: &'static str, value: f64) -> ConfigError {
        ConfigError::NonPositive {
            region: self.name.clone(),
            field,
            value,
        }
    }

    fn check_shape(&self, shape: &Shape) -> Result<(), ConfigError> {
        match shape {
            Shape::Box(b) => {
                for (axis, name) in AXES.iter().enumerate() {
                    let (min, max) = (b.min[axis], b.max[axis]);
                    if !(min.is_finite() && max.is_finite() && min < max) {
                        return Err(ConfigError::DegenerateExtent {
                            region: self.name.clone(),
                            axis: *name,
                            min,
                            max,
                        });
                    }
                }
            }
            Shape::Sphere(s) => {
                if !(s.radius.is_finite() && s.radius > 0.0) {
                    return Err(self.non_positive("radius", s.radius));
                }
                if let Some(axis) = (0..3).find(|&a| !s.center[a].is_finite()) {
                    return Err(ConfigError::DegenerateExtent {
                        region: self.name.clone(),
                        axis: AXES[axis],
                        min: s.center[axis],
                        max: s.center[axis],
                    });
                }
            }
        }
        Ok(())
    }

    fn check_density(&self) -> Result<Option<f64>, ConfigError> {
        match (self.density, self.method) {
            (Some(d), _) if !(d.is_finite() && d > 0.0) => Err(self.non_positive("density", d)),
            (None, Method::Sph) => Err(ConfigError::MissingDensity {
                region: self.name.clone(),
            }),
            (density, _) => Ok(density),
        }
    }

    fn unsupported(&self, reason: &str) -> ConfigError {
        ConfigError::UnsupportedResolution {
            region: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn resolve_cells(&self, shape: &Shape) -> Result<GridDims, ConfigError> {
        if let (Method::Fem, Shape::Sphere(sphere)) = (self.method, shape) {
            let half = match self.resolution {
                Resolution::Divisions(n) => n,
                Resolution::Counts([nx, ny, nz]) => {
                    if nx != ny || ny != nz || nx % 2 != 0 {
                        return Err(self.unsupported(
                            "an FEM sphere needs equal, even counts on every axis",
                        ));
                    }
                    nx / 2
                }
                Resolution::CellSize(h) => self.cells_along(sphere.radius, h, 'x')?,
            };
            if half == 0 {
                return Err(ConfigError::ZeroResolution {
                    region: self.name.clone(),
                    axis: 'x',
                });
            }
            return Ok(GridDims::cubic(2 * half));
        }

        let extent = match shape {
            Shape::Box(b) => b.extent(),
            Shape::Sphere(s) => s.bounding_box().extent(),
        };
        let counts = match self.resolution {
            Resolution::Counts(counts) => counts,
            Resolution::CellSize(h) => [
                self.cells_along(extent.x, h, 'x')?,
                self.cells_along(extent.y, h, 'y')?,
                self.cells_along(extent.z, h, 'z')?,
            ],
            Resolution::Divisions(_) => {
                return Err(self.unsupported("divisions only apply to FEM spheres"));
            }
        };
        if let Some(axis) = counts.iter().position(|&n| n == 0) {
            return Err(ConfigError::ZeroResolution {
                region: self.name.clone(),
                axis: AXES[axis],
            });
        }
        Ok(GridDims::new(counts[0], counts[1], counts[2]))
    }

    fn cells_along(&self, length: f64, h: f64, axis: char) -> Result<usize, ConfigError> {
        if !(h.is_finite() && h > 0.0) {
            return Err(self.non_positive("cell_size", h));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (length / h).floor() as usize;
        if n == 0 {
            return Err(ConfigError::ZeroResolution {
                region: self.name.clone(),
                axis,
            });
        }
        Ok(n)
    }

    fn check_ids(&self, region: &ResolvedRegion) -> Result<(), ConfigError> {
        let fields = [
            ("part_id", region.part_id, 1),
            ("start_nid", region.start_nid, region.node_capacity()),
            ("start_eid", region.start_eid, region.element_capacity()),
        ];
        for (field, start, count) in fields {
            if start == 0 {
                return Err(ConfigError::ZeroId {
                    region: self.name.clone(),
                    field,
                });
            }
            let last = u64::from(start).saturating_add(count - 1);
            if last > max_id() {
                return Err(ConfigError::IdOverflow {
                    region: self.name.clone(),
                    field,
                    last,
                    width: ID_WIDTH,
                });
            }
        }
        Ok(())
    }
}
