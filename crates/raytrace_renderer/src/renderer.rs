//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounce limit
//! - Gamma correction
//! - Anti-aliasing via multi-sampling
//! - Per-row random streams so parallel and sequential renders agree

use crate::sampling::gen_f64;
use crate::{Camera, Color, Hittable, Ray};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use raytrace_math::{lerp, Interval, Vec3};
use rayon::prelude::*;
use std::time::Instant;

/// Closest hit distance considered, to skip self-intersection at the origin surface.
pub const T_MIN: f64 = 0.001;

/// How a hit surface is turned into a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShadingMode {
    /// Full path tracing through the hit material
    #[default]
    Scatter,
    /// Surface normal mapped to RGB, no bounces
    Normals,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Highest bounce depth that may still scatter
    pub max_depth: u32,
    /// Surface shading mode
    pub mode: ShadingMode,
}

impl RenderConfig {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 200,
            image_height: 100,
            samples_per_pixel: 100,
            max_depth: 50,
            mode: ShadingMode::Scatter,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. Primary rays enter at depth 0;
/// each bounce recurses with depth + 1. A hit at a depth beyond
/// `config.max_depth`, or an absorbed ray, contributes black.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::beyond(T_MIN)) else {
        return sky_gradient(ray);
    };

    if config.mode == ShadingMode::Normals {
        return normal_color(rec.normal);
    }

    if depth > config.max_depth {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth + 1, config, rng)
        }
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
///
/// Blends white at the bottom to light blue at the top by the ray's
/// unit y component.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    lerp(white, blue, a)
}

/// Map a unit normal into [0, 1] RGB.
#[inline]
pub fn normal_color(normal: Vec3) -> Color {
    0.5 * (normal + 1.0)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGBA with gamma correction.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    color_to_rgba_linear(Color::new(
        linear_to_gamma(color.x),
        linear_to_gamma(color.y),
        linear_to_gamma(color.z),
    ))
}

/// Convert a color to 8-bit RGBA as-is.
pub fn color_to_rgba_linear(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Render a single pixel with multi-sampling.
///
/// Pixel (0, 0) is the top left of the image; the camera's t axis runs up.
/// Rows at or past `image_height` sample the bottom row.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width as f64;
    let height = config.image_height as f64;
    let row = config.image_height.saturating_sub(1).saturating_sub(y) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let s = (x as f64 + gen_f64(rng)) / width;
        let t = (row + gen_f64(rng)) / height;
        let ray = camera.ray(s, t);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
///
/// Row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to RGBA bytes, with or without gamma correction.
    pub fn to_rgba(&self, gamma: bool) -> Vec<u8> {
        let encode = if gamma {
            color_to_rgba
        } else {
            color_to_rgba_linear
        };
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&encode(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded, drawing every sample from one random stream.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.image_width, config.image_height);

    for y in 0..config.image_height {
        for x in 0..config.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    image
}

/// Seed for a row's random stream.
fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn render_row(
    camera: &Camera,
    world: &dyn Hittable,
    y: u32,
    row: &mut [Color],
    config: &RenderConfig,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(row_seed(seed, y));
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(camera, world, x as u32, y, config, &mut rng);
    }
}

/// Render sequentially with one seeded stream per row.
///
/// Produces the same image as [`render_parallel`] for the same seed.
pub fn render_seeded(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    seed: u64,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    if image.pixels.is_empty() {
        return image;
    }

    info!(
        "Rendering {}x{} @ {} spp on one thread",
        config.image_width, config.image_height, config.samples_per_pixel
    );
    let start = Instant::now();

    let width = config.image_width as usize;
    for (y, row) in image.pixels.chunks_mut(width).enumerate() {
        render_row(camera, world, y as u32, row, config, seed);
    }

    info!("Image rendered in {:.2?}", start.elapsed());
    image
}

/// Render rows in parallel with rayon.
///
/// The world is only read; each row owns its own random stream.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    seed: u64,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    if image.pixels.is_empty() {
        return image;
    }

    info!(
        "Rendering {}x{} @ {} spp on {} threads",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let width = config.image_width as usize;
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(camera, world, y as u32, row, config, seed));

    info!("Image rendered in {:.2?}", start.elapsed());
    image
}

/// Calibration pattern: red grows left to right, green top to bottom, blue fixed.
pub fn gradient(width: u32, height: u32) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = Color::new(x as f64 / width as f64, y as f64 / height as f64, 0.2);
            image.set(x, y, color);
        }
    }

    image
}
