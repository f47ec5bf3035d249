//! Camera for ray generation.

use crate::Ray;
use raytrace_math::Vec3;

/// Positionable pinhole camera.
///
/// The image plane sits one unit in front of `look_from`. All values are
/// derived once at construction; the camera is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `look_from` aimed at `look_at`.
    ///
    /// - `vup`: world up hint, must not be parallel to the view direction
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: image width over height
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f64, aspect_ratio: f64) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect_ratio * half_height;

        // Orthonormal basis: w points back from the target, u right, v up
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left_corner: look_from - u * half_width - v * half_height - w,
            horizontal: u * (2.0 * half_width),
            vertical: v * (2.0 * half_height),
        }
    }

    /// Ray through normalized image-plane coordinates.
    ///
    /// `(0, 0)` is the lower left corner, `(1, 1)` the upper right.
    pub fn ray(&self, s: f64, t: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + self.horizontal * s + self.vertical * t - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

impl Default for Camera {
    /// Looking down -Z from the origin with a 90 degree fov on a 2:1 image.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_frame() {
        let camera = Camera::default();

        assert_eq!(camera.origin(), Vec3::ZERO);
        assert!(camera
            .lower_left_corner()
            .abs_diff_eq(Vec3::new(-2.0, -1.0, -1.0), 1e-12));
        assert!(camera.horizontal().abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-12));
        assert!(camera.vertical().abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-12));
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new(
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            20.0,
            16.0 / 9.0,
        );

        let ray = camera.ray(0.5, 0.5);
        let expected = (Vec3::ZERO - Vec3::new(13.0, 2.0, 3.0)).normalize();

        assert_eq!(ray.origin(), Vec3::new(13.0, 2.0, 3.0));
        assert!(ray.direction().normalize().abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::default();

        let lower_left = camera.ray(0.0, 0.0);
        assert!(lower_left
            .direction()
            .abs_diff_eq(Vec3::new(-2.0, -1.0, -1.0), 1e-12));

        let upper_right = camera.ray(1.0, 1.0);
        assert!(upper_right
            .direction()
            .abs_diff_eq(Vec3::new(2.0, 1.0, -1.0), 1e-12));
    }

    #[test]
    fn test_field_of_view() {
        // 60 degrees: half height is tan(30 deg)
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 60.0, 1.0);
        let expected = 2.0 * (30.0_f64).to_radians().tan();

        assert!((camera.vertical().length() - expected).abs() < 1e-12);
        assert!((camera.horizontal().length() - expected).abs() < 1e-12);
    }
}
