mod hex_connectivity;
mod make_fem_mesh;
mod make_region;
mod make_sph_particles;

pub use hex_connectivity::{HexConnectivity, HEX_CORNERS};
pub use make_fem_mesh::MakeFemMesh;
pub use make_region::MakeRegion;
pub use make_sph_particles::MakeSphParticles;
