use crate::config::{Method, ResolvedRegion};
use crate::error::Result;
use crate::mesh::RegionMesh;

use super::{MakeFemMesh, MakeSphParticles};

/// Generates one region with the discretization it was configured for.
pub struct MakeRegion<'a> {
    region: &'a ResolvedRegion,
}

impl<'a> MakeRegion<'a> {
    /// Creates a new `MakeRegion` operation.
    #[must_use]
    pub fn new(region: &'a ResolvedRegion) -> Self {
        Self { region }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying generator fails.
    pub fn execute(&self) -> Result<RegionMesh> {
        match self.region.method {
            Method::Fem => MakeFemMesh::new(self.region).execute(),
            Method::Sph => MakeSphParticles::new(self.region).execute(),
        }
    }
}
