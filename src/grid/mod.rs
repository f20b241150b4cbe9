//! Structured grid addressing.
//!
//! A region's entities live on a logical `(i, j, k)` lattice. IDs are
//! handed out in nested order with X outermost and Z innermost ("Z-fastest"),
//! so the ID of any lattice point can be derived from its index without a
//! lookup table:
//!
//! `id = start + i * (ny * nz) + j * nz + k`

use crate::error::GenerationError;

/// A logical lattice coordinate `(i, j, k)`.
pub type LogicalIndex = [usize; 3];

/// Number of lattice points along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Points along X.
    pub nx: usize,
    /// Points along Y.
    pub ny: usize,
    /// Points along Z.
    pub nz: usize,
}

impl GridDims {
    /// Creates new grid dimensions.
    #[must_use]
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Creates cubic grid dimensions with `n` points per axis.
    #[must_use]
    pub fn cubic(n: usize) -> Self {
        Self::new(n, n, n)
    }

    /// Returns the dimensions as an array.
    #[must_use]
    pub fn as_array(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Total number of lattice points.
    #[must_use]
    pub fn count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Node lattice of an element grid (one more point per axis).
    #[must_use]
    pub fn nodes_of_cells(&self) -> Self {
        Self::new(self.nx + 1, self.ny + 1, self.nz + 1)
    }

    /// Returns `true` if `index` lies inside the lattice.
    #[must_use]
    pub fn contains(&self, index: LogicalIndex) -> bool {
        index[0] < self.nx && index[1] < self.ny && index[2] < self.nz
    }

    /// Iterates over every lattice index in Z-fastest order.
    pub fn indices(&self) -> impl Iterator<Item = LogicalIndex> {
        let Self { nx, ny, nz } = *self;
        (0..nx).flat_map(move |i| (0..ny).flat_map(move |j| (0..nz).map(move |k| [i, j, k])))
    }
}

/// Bijective mapping between lattice indices and sequential IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndexer {
    start: u32,
    dims: GridDims,
}

impl GridIndexer {
    /// Creates an indexer that numbers `dims` starting at `start`.
    #[must_use]
    pub fn new(start: u32, dims: GridDims) -> Self {
        Self { start, dims }
    }

    /// First ID handed out.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The lattice being numbered.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the ID of `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the lattice.
    pub fn id_of(&self, index: LogicalIndex) -> Result<u32, GenerationError> {
        if !self.dims.contains(index) {
            return Err(GenerationError::IndexOutOfRange {
                index,
                extent: self.dims.as_array(),
            });
        }
        let [i, j, k] = index;
        // Widths are validated against the 8-column ID field before generation.
        #[allow(clippy::cast_possible_truncation)]
        let offset = (i * self.dims.ny * self.dims.nz + j * self.dims.nz + k) as u32;
        Ok(self.start + offset)
    }

    /// Returns the lattice index numbered `id`, if it belongs to this grid.
    #[must_use]
    pub fn index_of(&self, id: u32) -> Option<LogicalIndex> {
        let offset = id.checked_sub(self.start)? as usize;
        if offset >= self.dims.count() {
            return None;
        }
        let plane = self.dims.ny * self.dims.nz;
        let i = offset / plane;
        let j = (offset % plane) / self.dims.nz;
        let k = offset % self.dims.nz;
        Some([i, j, k])
    }
}
