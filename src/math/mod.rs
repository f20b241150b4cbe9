pub mod cubed_sphere;
pub mod hex_volume;

pub use cubed_sphere::cube_to_sphere;
pub use hex_volume::hex_signed_volume;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
