use crate::math::Vector3;

/// Computes the mass carried by each particle of a uniform sampling grid.
///
/// Every particle of a region gets the same mass, `density * cell_volume`.
/// This holds for masked spheres too: particles are sampled on the bounding
/// cube's fixed grid and then filtered, so the mass is not corrected for the
/// sphere's true volume.
#[derive(Debug, Clone, Copy)]
pub struct ParticleMass {
    density: f64,
    cell_volume: f64,
}

impl ParticleMass {
    /// Mass for cells of edge lengths `cell`.
    #[must_use]
    pub fn from_cell(density: f64, cell: Vector3) -> Self {
        Self {
            density,
            cell_volume: cell.product(),
        }
    }

    /// Mass for `count` cells that exactly fill `volume`.
    ///
    /// Equal to [`ParticleMass::from_cell`] for a box, but computed from the
    /// total so that `count * mass` reproduces `density * volume`.
    #[must_use]
    pub fn from_fill(density: f64, volume: f64, count: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let cell_volume = volume / count as f64;
        Self {
            density,
            cell_volume,
        }
    }

    /// Volume attributed to one particle.
    #[must_use]
    pub fn cell_volume(&self) -> f64 {
        self.cell_volume
    }

    /// Executes the query, returning the per-particle mass.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.density * self.cell_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cell_mass() {
        let m = ParticleMass::from_cell(7.8, Vector3::new(0.1, 0.2, 0.5)).execute();
        assert_relative_eq!(m, 7.8 * 0.01, epsilon = 1e-15);
    }

    #[test]
    fn fill_matches_cell_for_a_box() {
        let (lx, ly, lz) = (5.08, 5.08, 0.635);
        let (nx, ny, nz) = (111.0, 111.0, 14.0);
        let by_cell =
            ParticleMass::from_cell(7.8, Vector3::new(lx / nx, ly / ny, lz / nz)).execute();
        let by_fill = ParticleMass::from_fill(7.8, lx * ly * lz, 111 * 111 * 14).execute();
        assert_relative_eq!(by_cell, by_fill, max_relative = 1e-12);
    }

    #[test]
    fn fill_conserves_total_mass() {
        for count in [1, 8, 1000, 172_494] {
            let m = ParticleMass::from_fill(2.5, 3.0, count);
            #[allow(clippy::cast_precision_loss)]
            let total = m.execute() * count as f64;
            assert_relative_eq!(total, 7.5, max_relative = 1e-14);
        }
    }
}
