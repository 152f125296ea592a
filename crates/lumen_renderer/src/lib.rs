//! Lumen Renderer - CPU path tracing.
//!
//! A Monte Carlo path tracer lit only by a sky gradient. Rays are traced
//! recursively through a world of [`Hittable`] objects; each surface's
//! [`Material`] decides whether light continues and how much of it survives.
//!
//! Rendering is single threaded. Every random draw comes from the generator
//! passed to [`Camera::render`], so a fixed seed gives a fixed image.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Absorber, Dielectric, Lambertian, Material, Metal, Scatter};
pub use output::{
    color_to_rgb8, linear_to_gamma, writer_for_path, OutputError, OutputResult, PixelWriter,
    PngWriter, PpmWriter,
};
pub use renderer::{ray_color, render_pixel, sky_color, T_MIN};
pub use scene::{build_world, material_from_desc};
pub use sphere::Sphere;

/// Re-export the math types used throughout the public API
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
