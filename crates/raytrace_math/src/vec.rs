//! Vector algebra helpers on top of `glam::DVec3`.
//!
//! glam already provides the arithmetic (negate, add/sub, component-wise and
//! scalar mul/div, scalar add/sub, `length_squared`, `length`, `normalize`,
//! `dot`, `cross`). Normalizing a zero vector or dividing by zero yields
//! inf/NaN components; nothing here guards against that.

use crate::Vec3;

/// Channel accessors for vectors used as RGB colors.
pub trait ColorExt {
    fn r(&self) -> f64;
    fn g(&self) -> f64;
    fn b(&self) -> f64;
}

impl ColorExt for Vec3 {
    #[inline]
    fn r(&self) -> f64 {
        self.x
    }

    #[inline]
    fn g(&self) -> f64 {
        self.y
    }

    #[inline]
    fn b(&self) -> f64 {
        self.z
    }
}

/// Linear interpolation: `(1 - t) * a + t * b`.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    a * (1.0 - t) + b * t
}
