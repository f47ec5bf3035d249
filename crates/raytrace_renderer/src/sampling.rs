//! Random sampling helpers.
//!
//! Every function takes the random stream explicitly so renders are
//! reproducible from a seed and each worker can own its own stream.

use crate::{Color, Vec3};
use rand::{Rng, RngCore};

/// Uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Uniform f64 in [min, max).
#[inline]
pub fn gen_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Random point strictly inside the unit sphere.
///
/// Rejection sampling from the [-1, 1) cube; about two draws on average.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f64_range(rng, -1.0, 1.0),
            gen_f64_range(rng, -1.0, 1.0),
            gen_f64_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random color with each channel in [0, 1).
pub fn random_color(rng: &mut dyn RngCore) -> Color {
    Color::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Random color with each channel in [min, max).
pub fn random_color_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Color {
    Color::new(
        gen_f64_range(rng, min, max),
        gen_f64_range(rng, min, max),
        gen_f64_range(rng, min, max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f64_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f64_range(&mut rng, -1.0, 1.0);
            assert!((-1.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_in_unit_sphere_is_centered() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 10_000;
        let sum = (0..n).fold(Vec3::ZERO, |acc, _| acc + random_in_unit_sphere(&mut rng));
        let mean = sum / n as f64;
        assert!(mean.length() < 0.05, "mean = {mean}");
    }

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(random_color(&mut a), random_color(&mut b));
        assert_eq!(random_in_unit_sphere(&mut a), random_in_unit_sphere(&mut b));
    }

    #[test]
    fn test_random_color_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let c = random_color_range(&mut rng, 0.5, 1.0);
            assert!(c.min_element() >= 0.5 && c.max_element() < 1.0);
        }
    }
}
