//! Math types for the raytrace renderer.
//!
//! Vectors are double precision: `Vec3` is `glam::DVec3` and stands in for
//! points, directions and colors alike.

// Re-export glam for convenience
pub use glam::DVec3;

/// Three-component f64 vector used for points, directions and colors.
pub type Vec3 = DVec3;

mod interval;
mod ray;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{lerp, ColorExt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let c = a + b;
        assert_eq!(c, Vec3::new(5.0, 7.0, 9.0));
    }
}
