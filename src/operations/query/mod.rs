mod hex_volumes;
mod id_overlaps;
mod particle_mass;
mod region_summary;

pub use hex_volumes::{HexVolumeStats, HexVolumes};
pub use id_overlaps::{Diagnostic, IdNamespace, IdOverlaps, IdRange};
pub use particle_mass::ParticleMass;
pub use region_summary::{RegionSummary, SummarizeRegion};
