use std::fmt;

use crate::config::{Method, ResolvedRegion};
use crate::mesh::{Elements, RegionMesh};

use super::HexVolumes;

/// Counts and totals of one generated region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub name: String,
    pub method: Method,
    pub shape: &'static str,
    pub nodes: usize,
    pub elements: usize,
    /// Particle masses summed, or density times meshed volume for solids.
    /// `None` for solids without a density.
    pub total_mass: Option<f64>,
    /// Smallest signed solid element volume.
    pub min_hex_volume: Option<f64>,
}

impl fmt::Display for RegionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}): {} nodes, {} elements",
            self.name, self.method, self.shape, self.nodes, self.elements
        )?;
        if let Some(mass) = self.total_mass {
            write!(f, ", mass {mass:.6e}")?;
        }
        if let Some(v) = self.min_hex_volume {
            write!(f, ", min element volume {v:.6e}")?;
        }
        Ok(())
    }
}

/// Summarizes a generated region against its configuration.
pub struct SummarizeRegion<'a> {
    region: &'a ResolvedRegion,
    mesh: &'a RegionMesh,
}

impl<'a> SummarizeRegion<'a> {
    /// Creates a new `SummarizeRegion` query.
    #[must_use]
    pub fn new(region: &'a ResolvedRegion, mesh: &'a RegionMesh) -> Self {
        Self { region, mesh }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> RegionSummary {
        let (total_mass, min_hex_volume) = match &self.mesh.elements {
            Elements::Sph(particles) => (Some(particles.iter().map(|p| p.mass).sum()), None),
            Elements::Solid(_) => {
                let stats = HexVolumes::new(self.mesh).execute();
                let mass = self
                    .region
                    .density
                    .zip(stats)
                    .map(|(density, s)| density * s.total);
                (mass, stats.map(|s| s.min))
            }
        };
        RegionSummary {
            name: self.mesh.name.clone(),
            method: self.region.method,
            shape: self.region.shape.kind(),
            nodes: self.mesh.nodes.len(),
            elements: self.mesh.elements.len(),
            total_mass,
            min_hex_volume,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{BoxShape, Shape};
    use crate::grid::GridDims;
    use crate::math::Point3;
    use crate::operations::creation::MakeRegion;
    use approx::assert_relative_eq;

    fn slab(method: Method, density: Option<f64>) -> ResolvedRegion {
        ResolvedRegion {
            name: "slab".into(),
            method,
            shape: Shape::Box(BoxShape::new(Point3::origin(), Point3::new(2.0, 1.0, 0.5))),
            cells: GridDims::new(4, 2, 1),
            density,
            part_id: 1,
            start_nid: 1,
            start_eid: 1,
        }
    }

    #[test]
    fn solid_summary() {
        let region = slab(Method::Fem, Some(3.0));
        let mesh = MakeRegion::new(&region).execute().unwrap();
        let summary = SummarizeRegion::new(&region, &mesh).execute();
        assert_eq!(summary.nodes, 5 * 3 * 2);
        assert_eq!(summary.elements, 8);
        assert_eq!(summary.shape, "box");
        assert_relative_eq!(summary.total_mass.unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.min_hex_volume.unwrap(), 0.125, epsilon = 1e-12);
    }

    #[test]
    fn solid_without_density_has_no_mass() {
        let region = slab(Method::Fem, None);
        let mesh = MakeRegion::new(&region).execute().unwrap();
        let summary = SummarizeRegion::new(&region, &mesh).execute();
        assert!(summary.total_mass.is_none());
        assert!(summary.min_hex_volume.is_some());
    }

    #[test]
    fn particle_summary() {
        let region = slab(Method::Sph, Some(3.0));
        let mesh = MakeRegion::new(&region).execute().unwrap();
        let summary = SummarizeRegion::new(&region, &mesh).execute();
        assert_eq!(summary.nodes, 8);
        assert_eq!(summary.elements, 8);
        assert_relative_eq!(summary.total_mass.unwrap(), 3.0, epsilon = 1e-12);
        assert!(summary.min_hex_volume.is_none());
        assert!(summary.to_string().starts_with("slab (sph box): 8 nodes, 8 elements"));
    }
}
