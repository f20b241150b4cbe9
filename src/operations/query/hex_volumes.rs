use crate::math::hex_signed_volume;
use crate::mesh::{Elements, RegionMesh};

/// Volume statistics of the solid elements of one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexVolumeStats {
    /// Smallest signed element volume. Non-positive means inverted.
    pub min: f64,
    /// Sum of signed element volumes.
    pub total: f64,
}

/// Measures the signed volumes of a region's hexahedra.
pub struct HexVolumes<'a> {
    mesh: &'a RegionMesh,
}

impl<'a> HexVolumes<'a> {
    /// Creates a new `HexVolumes` query.
    #[must_use]
    pub fn new(mesh: &'a RegionMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query.
    ///
    /// Returns `None` for particle regions, empty regions, or elements
    /// referencing nodes outside the region.
    #[must_use]
    pub fn execute(&self) -> Option<HexVolumeStats> {
        let Elements::Solid(elements) = &self.mesh.elements else {
            return None;
        };
        let mut stats: Option<HexVolumeStats> = None;
        for element in elements {
            let v = hex_signed_volume(&self.mesh.hex_corners(element)?);
            stats = Some(match stats {
                None => HexVolumeStats { min: v, total: v },
                Some(s) => HexVolumeStats {
                    min: s.min.min(v),
                    total: s.total + v,
                },
            });
        }
        stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::{HexElement, Node, Particle};
    use approx::assert_relative_eq;

    fn unit_cube(nodes: [u32; 8]) -> RegionMesh {
        let corners = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ];
        RegionMesh {
            name: "cube".into(),
            node_start: 1,
            element_start: 1,
            nodes: corners
                .iter()
                .zip(1..)
                .map(|(c, id)| Node {
                    id,
                    position: Point3::from(*c),
                })
                .collect(),
            elements: Elements::Solid(vec![HexElement {
                id: 1,
                part_id: 1,
                nodes,
            }]),
        }
    }

    #[test]
    fn unit_cube_volume() {
        let stats = HexVolumes::new(&unit_cube([1, 2, 3, 4, 5, 6, 7, 8]))
            .execute()
            .unwrap();
        assert_relative_eq!(stats.min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(stats.total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn inverted_element_is_negative() {
        let stats = HexVolumes::new(&unit_cube([5, 6, 7, 8, 1, 2, 3, 4]))
            .execute()
            .unwrap();
        assert!(stats.min < 0.0);
    }

    #[test]
    fn dangling_node_gives_none() {
        let mesh = unit_cube([1, 2, 3, 4, 5, 6, 7, 99]);
        assert!(HexVolumes::new(&mesh).execute().is_none());
    }

    #[test]
    fn particles_have_no_hex_volume() {
        let mut mesh = unit_cube([1, 2, 3, 4, 5, 6, 7, 8]);
        mesh.elements = Elements::Sph(vec![Particle {
            id: 1,
            part_id: 1,
            node: 1,
            mass: 1.0,
        }]);
        assert!(HexVolumes::new(&mesh).execute().is_none());
    }
}
