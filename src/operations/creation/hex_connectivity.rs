use crate::error::GenerationError;
use crate::grid::{GridDims, GridIndexer, LogicalIndex};

/// Corner offsets of a cell in solid-element order.
///
/// Bottom face `(i,j,k) -> (i+1,j,k) -> (i+1,j+1,k) -> (i,j+1,k)`, then the
/// same four corners at `k+1`. Any other order yields inverted elements.
pub const HEX_CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Resolves the 8 corner node IDs of cells in a node lattice.
#[derive(Debug, Clone, Copy)]
pub struct HexConnectivity {
    nodes: GridIndexer,
}

impl HexConnectivity {
    /// Creates a builder over the numbered node lattice `nodes`.
    #[must_use]
    pub fn new(nodes: GridIndexer) -> Self {
        Self { nodes }
    }

    /// The cell lattice, one less than the node lattice per axis.
    #[must_use]
    pub fn cells(&self) -> GridDims {
        let d = self.nodes.dims();
        GridDims::new(
            d.nx.saturating_sub(1),
            d.ny.saturating_sub(1),
            d.nz.saturating_sub(1),
        )
    }

    /// Returns the corner node IDs of `cell`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` lies outside the cell lattice.
    pub fn corners(&self, cell: LogicalIndex) -> Result<[u32; 8], GenerationError> {
        let cells = self.cells();
        if !cells.contains(cell) {
            return Err(GenerationError::IndexOutOfRange {
                index: cell,
                extent: cells.as_array(),
            });
        }
        let [i, j, k] = cell;
        let mut ids = [0; 8];
        for (id, [di, dj, dk]) in ids.iter_mut().zip(HEX_CORNERS) {
            *id = self.nodes.id_of([i + di, j + dj, k + dk])?;
        }
        Ok(ids)
    }
}
