//! Positions of lattice points.
//!
//! Samplers are pure functions of a logical index, so a position can be
//! computed once and buffered or recomputed on demand with identical results.

use crate::grid::{GridDims, LogicalIndex};
use crate::math::{cube_to_sphere, Point3, Vector3};

use super::{BoxShape, SphereShape};

/// Maps a logical index to a position in space.
pub trait Sampler {
    /// Position of the lattice point at `index`.
    fn sample(&self, index: LogicalIndex) -> Point3;
}

/// Where a sample sits inside its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Cell corners, used for FEM nodes.
    Corner,
    /// Cell centers, used for SPH particles.
    CellCentered,
}

impl SampleMode {
    fn offset(self) -> f64 {
        match self {
            SampleMode::Corner => 0.0,
            SampleMode::CellCentered => 0.5,
        }
    }
}

/// Linear sampling of an axis-aligned box divided into uniform cells.
#[derive(Debug, Clone, Copy)]
pub struct BoxSampler {
    min: Point3,
    cell: Vector3,
    offset: f64,
}

impl BoxSampler {
    /// Creates a sampler that divides `shape` into `cells` uniform cells.
    #[must_use]
    pub fn new(shape: &BoxShape, cells: GridDims, mode: SampleMode) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let counts = Vector3::new(cells.nx as f64, cells.ny as f64, cells.nz as f64);
        Self {
            min: shape.min,
            cell: shape.extent().component_div(&counts),
            offset: mode.offset(),
        }
    }

    /// Cell edge lengths `(dx, dy, dz)`.
    #[must_use]
    pub fn cell_size(&self) -> Vector3 {
        self.cell
    }

    /// Coordinate of `index` along a single axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn axis(&self, axis: usize, index: usize) -> f64 {
        self.min[axis] + (index as f64 + self.offset) * self.cell[axis]
    }
}

impl Sampler for BoxSampler {
    fn sample(&self, index: LogicalIndex) -> Point3 {
        Point3::new(
            self.axis(0, index[0]),
            self.axis(1, index[1]),
            self.axis(2, index[2]),
        )
    }
}

/// Cubed-sphere sampling of a `(2N + 1)^3` node lattice.
///
/// Index `i` is normalized to `u = (i - N) / N` in `[-1, 1]`, projected
/// onto the unit ball, then scaled by the radius and moved to the center.
#[derive(Debug, Clone, Copy)]
pub struct CubedSphereSampler {
    center: Point3,
    radius: f64,
    half: usize,
}

impl CubedSphereSampler {
    /// Creates a sampler with `half` element divisions along the radius.
    #[must_use]
    pub fn new(shape: &SphereShape, half: usize) -> Self {
        Self {
            center: shape.center,
            radius: shape.radius,
            half,
        }
    }

    /// Node lattice spanned by the sampler.
    #[must_use]
    pub fn node_dims(&self) -> GridDims {
        GridDims::cubic(2 * self.half + 1)
    }

    #[allow(clippy::cast_precision_loss)]
    fn normalize(&self, i: usize) -> f64 {
        let n = self.half as f64;
        (i as f64 - n) / n
    }
}

impl Sampler for CubedSphereSampler {
    fn sample(&self, index: LogicalIndex) -> Point3 {
        let [i, j, k] = index;
        let unit = cube_to_sphere(self.normalize(i), self.normalize(j), self.normalize(k));
        self.center + unit * self.radius
    }
}
