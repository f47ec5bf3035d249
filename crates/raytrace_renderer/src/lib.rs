//! raytrace renderer - CPU path tracing
//!
//! A recursive path tracer over spheres with diffuse, metal and glass
//! materials. The core (`Hittable`, `Material`, `Camera`, `ray_color`) is
//! pure and single-threaded; randomness is always passed in explicitly.
//! The driver functions in `renderer` and the `output` module sit on top.

mod camera;
mod hittable;
mod material;
pub mod output;
mod renderer;
pub mod sampling;
pub mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{
    reflect, refract, schlick, Color, Dielectric, Lambertian, Material, Metal, ScatterResult,
};
pub use output::{save_image, OutputError, OutputResult};
pub use renderer::{
    clamp_01, color_to_rgba, color_to_rgba_linear, gradient, linear_to_gamma, normal_color,
    ray_color, render, render_parallel, render_pixel, render_seeded, sky_gradient, ImageBuffer,
    RenderConfig, ShadingMode, T_MIN,
};
pub use sphere::Sphere;

/// Re-export math types from raytrace_math
pub use raytrace_math::{ColorExt, Interval, Ray, Vec3};
