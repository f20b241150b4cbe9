use super::Vector3;

/// Maps a point of the cube `[-1, 1]^3` onto the unit ball.
///
/// `x' = u * sqrt(1 - v^2/2 - w^2/2 + v^2 w^2/3)` and cyclic permutations.
///
/// Every point on the cube's surface lands on the unit sphere, and the map
/// keeps grid cells close to their original aspect ratio instead of
/// collapsing them at the poles the way latitude/longitude sampling does.
#[must_use]
pub fn cube_to_sphere(u: f64, v: f64, w: f64) -> Vector3 {
    let (u2, v2, w2) = (u * u, v * v, w * w);
    Vector3::new(
        u * (1.0 - v2 / 2.0 - w2 / 2.0 + v2 * w2 / 3.0).sqrt(),
        v * (1.0 - u2 / 2.0 - w2 / 2.0 + u2 * w2 / 3.0).sqrt(),
        w * (1.0 - u2 / 2.0 - v2 / 2.0 + u2 * v2 / 3.0).sqrt(),
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_surface_lands_on_unit_sphere() {
        let values = [-1.0, 0.0, 1.0];
        for &u in &values {
            for &v in &values {
                for &w in &values {
                    let on_surface = [u, v, w].iter().any(|c: &f64| c.abs() == 1.0);
                    if !on_surface {
                        continue;
                    }
                    let p = cube_to_sphere(u, v, w);
                    assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn origin_is_fixed() {
        let p = cube_to_sphere(0.0, 0.0, 0.0);
        assert_relative_eq!(p.norm(), 0.0);
    }

    #[test]
    fn face_interior_lands_on_sphere() {
        let p = cube_to_sphere(1.0, 0.3, -0.7);
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn axes_are_preserved() {
        let p = cube_to_sphere(0.5, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn interior_stays_inside() {
        let p = cube_to_sphere(0.9, -0.8, 0.95);
        assert!(p.norm() < 1.0);
    }
}
