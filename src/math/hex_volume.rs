use super::Point3;

/// Splits a hexahedron into six tetrahedra sharing the diagonal from
/// corner 0 to corner 6.
const TETS: [[usize; 3]; 6] = [
    [1, 2, 6],
    [2, 3, 6],
    [3, 7, 6],
    [7, 4, 6],
    [4, 5, 6],
    [5, 1, 6],
];

/// Computes the signed volume of a hexahedron.
///
/// Corners follow the solid-element convention: bottom face `0-1-2-3`
/// counter-clockwise when seen from the top face, then `4-5-6-7` directly
/// above. A correctly ordered element has a positive volume; a permuted
/// one comes out negative or close to zero.
#[must_use]
pub fn hex_signed_volume(corners: &[Point3; 8]) -> f64 {
    let origin = corners[0];
    let six_v: f64 = TETS
        .iter()
        .map(|&[b, c, d]| {
            let ab = corners[b] - origin;
            let ac = corners[c] - origin;
            let ad = corners[d] - origin;
            ab.dot(&ac.cross(&ad))
        })
        .sum();
    six_v / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube(min: [f64; 3], max: [f64; 3]) -> [Point3; 8] {
        let [x0, y0, z0] = min;
        let [x1, y1, z1] = max;
        [
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x0, y1, z1),
        ]
    }

    #[test]
    fn unit_cube_has_unit_volume() {
        let v = hex_signed_volume(&cube([0.0; 3], [1.0; 3]));
        assert_relative_eq!(v, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn brick_volume() {
        let v = hex_signed_volume(&cube([-1.0, 2.0, 0.5], [1.0, 5.0, 4.5]));
        assert_relative_eq!(v, 24.0, epsilon = 1e-12);
    }

    #[test]
    fn swapped_faces_invert_volume() {
        let mut c = cube([0.0; 3], [1.0; 3]);
        c.swap(0, 4);
        c.swap(1, 5);
        c.swap(2, 6);
        c.swap(3, 7);
        assert!(hex_signed_volume(&c) < 0.0);
    }

    #[test]
    fn clockwise_bottom_face_inverts_volume() {
        let mut c = cube([0.0; 3], [2.0; 3]);
        c.swap(1, 3);
        c.swap(5, 7);
        assert_relative_eq!(hex_signed_volume(&c), -8.0, epsilon = 1e-12);
    }
}
