//! Simple path tracer example.
//!
//! Renders the material showcase scene and saves it as PPM.

use raytrace_renderer::{output::save_ppm, render, scene, Camera, RenderConfig, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("raytrace - Simple Example");
    println!("=========================");

    let start = std::time::Instant::now();
    let world = scene::showcase();
    println!("Scene built with {} objects in {:?}", world.len(), start.elapsed());

    let config = RenderConfig {
        image_width: 400,
        image_height: 200,
        samples_per_pixel: 50,
        ..Default::default()
    };

    let camera = Camera::new(
        Vec3::new(-2.0, 2.0, 1.0), // look_from
        Vec3::new(0.0, 0.0, -1.0), // look_at
        Vec3::new(0.0, 1.0, 0.0),  // vup
        30.0,
        config.aspect_ratio(),
    );

    println!(
        "Rendering {}x{} @ {} spp...",
        config.image_width, config.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(42);
    let image = render(&camera, &world, &config, &mut rng);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename, true).expect("Failed to save image");
    println!("Saved to {}", filename);
}
