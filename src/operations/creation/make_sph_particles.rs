use tracing::debug;

use crate::config::ResolvedRegion;
use crate::error::{ConfigError, Result};
use crate::geometry::{AcceptAll, BoxSampler, Predicate, SampleMode, Sampler, Shape, SphereMask};
use crate::grid::GridDims;
use crate::math::Point3;
use crate::mesh::{Elements, Node, Particle, RegionMesh};
use crate::operations::query::ParticleMass;

/// Samples one SPH particle per accepted cell center of a region.
///
/// A box keeps every cell of its grid. A sphere is sampled on the grid of
/// its bounding cube and masked by radial distance, so the particle count
/// depends on how many cell centers fall inside the sphere. Nodes and
/// particles are numbered consecutively in Z-fastest sampling order.
pub struct MakeSphParticles<'a> {
    region: &'a ResolvedRegion,
}

impl<'a> MakeSphParticles<'a> {
    /// Creates a new `MakeSphParticles` operation.
    #[must_use]
    pub fn new(region: &'a ResolvedRegion) -> Self {
        Self { region }
    }

    /// Executes the operation, returning the region's nodes and particles.
    ///
    /// # Errors
    ///
    /// Returns an error if the region has no density.
    pub fn execute(&self) -> Result<RegionMesh> {
        let region = self.region;
        let density = region.density.ok_or_else(|| ConfigError::MissingDensity {
            region: region.name.clone(),
        })?;
        let cells = region.cells;

        let (positions, mass) = match &region.shape {
            Shape::Box(b) => {
                let sampler = BoxSampler::new(b, cells, SampleMode::CellCentered);
                let mass = ParticleMass::from_fill(density, b.volume(), cells.count());
                (sample_masked(&sampler, cells, &AcceptAll), mass)
            }
            Shape::Sphere(s) => {
                let sampler = BoxSampler::new(&s.bounding_box(), cells, SampleMode::CellCentered);
                let mass = ParticleMass::from_cell(density, sampler.cell_size());
                (sample_masked(&sampler, cells, &SphereMask::new(s)), mass)
            }
        };
        let mass = mass.execute();

        let nodes: Vec<Node> = positions
            .into_iter()
            .zip(region.start_nid..)
            .map(|(position, id)| Node { id, position })
            .collect();
        let particles: Vec<Particle> = nodes
            .iter()
            .zip(region.start_eid..)
            .map(|(node, id)| Particle {
                id,
                part_id: region.part_id,
                node: node.id,
                mass,
            })
            .collect();

        debug!(
            region = %region.name,
            shape = region.shape.kind(),
            candidates = cells.count(),
            particles = particles.len(),
            mass,
            "generated particles"
        );

        Ok(RegionMesh {
            name: region.name.clone(),
            node_start: region.start_nid,
            element_start: region.start_eid,
            nodes,
            elements: Elements::Sph(particles),
        })
    }
}

/// Cell centers of `cells` accepted by `predicate`, in Z-fastest order.
fn sample_masked<P: Predicate>(sampler: &BoxSampler, cells: GridDims, predicate: &P) -> Vec<Point3> {
    let mut points = Vec::new();
    for i in 0..cells.nx {
        let x = sampler.axis(0, i);
        if predicate.rejects_slice(x) {
            continue;
        }
        for j in 0..cells.ny {
            let y = sampler.axis(1, j);
            if predicate.rejects_column(x, y) {
                continue;
            }
            for k in 0..cells.nz {
                let p = sampler.sample([i, j, k]);
                if predicate.contains(&p) {
                    points.push(p);
                }
            }
        }
    }
    points
}
