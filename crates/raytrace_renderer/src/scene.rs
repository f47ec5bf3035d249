//! Scene builders.
//!
//! Each builder returns a ready-to-render [`HittableList`]. Only
//! `random_scene` consumes randomness, and only from the stream it is given.

use crate::sampling::{gen_f64, random_color, random_color_range};
use crate::{Color, Dielectric, HittableList, Lambertian, Metal, Sphere};
use log::debug;
use rand::RngCore;
use raytrace_math::Vec3;

/// Grid half-extent for the small spheres of [`random_scene`].
const GRID: i32 = 11;

/// Small spheres closer than this to the reserved point are skipped.
const CLEARANCE: f64 = 0.9;

/// Ground, a 22 x 22 grid of small random spheres and three large ones.
///
/// Small sphere materials: 80% diffuse with squared-random albedo, 15%
/// mirror metal with albedo in [0.5, 1), 5% glass.
pub fn random_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    )));

    let reserved = Vec3::new(4.0, 0.2, 0.0);
    for a in -GRID..GRID {
        for b in -GRID..GRID {
            let choose_mat = gen_f64(rng);
            let center = Vec3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            if (center - reserved).length() <= CLEARANCE {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = random_color(rng) * random_color(rng);
                world.add(Box::new(Sphere::new(center, 0.2, Lambertian::new(albedo))));
            } else if choose_mat < 0.95 {
                let albedo = random_color_range(rng, 0.5, 1.0);
                world.add(Box::new(Sphere::new(center, 0.2, Metal::new(albedo, 0.0))));
            } else {
                world.add(Box::new(Sphere::new(center, 0.2, Dielectric::new(1.5))));
            }
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Dielectric::new(1.5),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Metal::new(Color::new(0.7, 0.6, 0.5), 0.0),
    )));

    debug!("Random scene built with {} spheres", world.len());
    world
}

/// Diffuse, metal and glass spheres side by side on a large ground sphere.
pub fn showcase() -> HittableList {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.1, 0.2, 0.5)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 0.3),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Dielectric::new(1.5),
    )));

    debug!("Showcase scene built with {} spheres", world.len());
    world
}

/// One grey sphere straight ahead of the default camera.
pub fn single_sphere() -> HittableList {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    )));
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Ray};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use raytrace_math::Interval;

    fn window() -> Interval {
        Interval::beyond(0.001)
    }

    #[test]
    fn test_random_scene_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = random_scene(&mut rng);

        // Ground + three feature spheres + at most 22 * 22 small ones
        assert!(world.len() >= 4);
        assert!(world.len() <= 4 + 484);
        // Only cells near the reserved point can be rejected
        assert!(world.len() > 4 + 470);
    }

    #[test]
    fn test_random_scene_is_reproducible() {
        let a = random_scene(&mut StdRng::seed_from_u64(7));
        let b = random_scene(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.len(), b.len());

        let mut probe = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let origin = Vec3::new(13.0, 2.0, 3.0);
            let target = Vec3::new(
                gen_f64(&mut probe) * 22.0 - 11.0,
                0.2,
                gen_f64(&mut probe) * 22.0 - 11.0,
            );
            let ray = Ray::new(origin, target - origin);

            let ta = a.hit(&ray, window()).map(|rec| rec.t);
            let tb = b.hit(&ray, window()).map(|rec| rec.t);
            assert_eq!(ta, tb);
        }
    }

    #[test]
    fn test_random_scene_feature_spheres() {
        let world = random_scene(&mut StdRng::seed_from_u64(3));

        // Straight down onto the top of the glass sphere
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let rec = world.hit(&ray, window()).expect("should hit the glass sphere");
        assert!((rec.p.y - 2.0).abs() < 1e-9);

        // Ground far from the grid
        let ray = Ray::new(Vec3::new(50.0, 10.0, 50.0), Vec3::NEG_Y);
        let rec = world.hit(&ray, window()).expect("should hit the ground");
        assert!(rec.normal.y > 0.99);
    }

    #[test]
    fn test_showcase_center_hit() {
        let world = showcase();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = world.hit(&ray, window()).expect("should hit center sphere");
        assert_eq!(world.len(), 4);
        assert!((rec.t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_sphere() {
        let world = single_sphere();
        assert_eq!(world.len(), 1);
    }
}
