use tracing::debug;

use crate::config::ResolvedRegion;
use crate::error::{GenerationError, Result};
use crate::geometry::{BoxSampler, CubedSphereSampler, SampleMode, Sampler, Shape};
use crate::grid::GridIndexer;
use crate::mesh::{Elements, HexElement, Node, RegionMesh};

use super::HexConnectivity;

/// Builds a structured hexahedral mesh for one region.
///
/// Boxes place nodes on cell corners. Spheres use the cubed-sphere
/// projection of a `(2N + 1)^3` node lattice, which keeps the mesh fully
/// connected with every boundary node on the sphere's surface.
pub struct MakeFemMesh<'a> {
    region: &'a ResolvedRegion,
}

impl<'a> MakeFemMesh<'a> {
    /// Creates a new `MakeFemMesh` operation.
    #[must_use]
    pub fn new(region: &'a ResolvedRegion) -> Self {
        Self { region }
    }

    /// Executes the operation, returning the region's nodes and solids.
    ///
    /// # Errors
    ///
    /// Returns an error if a lattice index falls outside the node grid.
    pub fn execute(&self) -> Result<RegionMesh> {
        let region = self.region;
        let cells = region.cells;
        let indexer = GridIndexer::new(region.start_nid, cells.nodes_of_cells());

        let nodes = match &region.shape {
            Shape::Box(b) => {
                sample_nodes(&indexer, &BoxSampler::new(b, cells, SampleMode::Corner))?
            }
            Shape::Sphere(s) => sample_nodes(&indexer, &CubedSphereSampler::new(s, cells.nx / 2))?,
        };

        let hex = HexConnectivity::new(indexer);
        let elements = hex
            .cells()
            .indices()
            .zip(region.start_eid..)
            .map(|(cell, id)| {
                Ok(HexElement {
                    id,
                    part_id: region.part_id,
                    nodes: hex.corners(cell)?,
                })
            })
            .collect::<std::result::Result<Vec<_>, GenerationError>>()?;

        debug!(
            region = %region.name,
            shape = region.shape.kind(),
            nodes = nodes.len(),
            elements = elements.len(),
            "generated solid mesh"
        );

        Ok(RegionMesh {
            name: region.name.clone(),
            node_start: region.start_nid,
            element_start: region.start_eid,
            nodes,
            elements: Elements::Solid(elements),
        })
    }
}

fn sample_nodes<S: Sampler>(
    indexer: &GridIndexer,
    sampler: &S,
) -> std::result::Result<Vec<Node>, GenerationError> {
    indexer
        .dims()
        .indices()
        .map(|index| {
            Ok(Node {
                id: indexer.id_of(index)?,
                position: sampler.sample(index),
            })
        })
        .collect()
}
