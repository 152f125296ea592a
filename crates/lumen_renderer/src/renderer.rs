//! Core path tracing.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a bounce budget
//! - A white-to-blue sky gradient as the only light source
//! - Anti-aliasing via multi-sampling

use crate::{Camera, HitRecord, Hittable, Scatter};
use lumen_math::{Color, Interval, Ray};
use rand::RngCore;

/// Smallest accepted hit distance for traced rays.
///
/// Scattered rays start on the surface they left; floating point error can
/// place that origin just below it. Ignoring hits closer than this avoids
/// the resulting self-intersection speckle ("shadow acne").
pub const T_MIN: f64 = 0.001;

/// Compute the color seen by a ray.
///
/// Each bounce multiplies in the material's attenuation. A path that runs
/// out of `depth` contributes black, so even a scene that always hits
/// something terminates.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    if !world.hit(ray, Interval::new(T_MIN, f64::INFINITY), &mut rec) {
        return sky_color(ray);
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(Scatter {
            attenuation,
            scattered,
        }) => attenuation * ray_color(&scattered, depth - 1, world, rng),
        // Absorbed
        None => Color::ZERO,
    }
}

/// Vertical sky gradient: white looking straight down, light blue straight up.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Render a single pixel with multi-sampling.
///
/// The camera must be initialized. Returns the average of
/// `samples_per_pixel` jittered samples.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, camera.max_depth, world, rng);
    }

    pixel_color / camera.samples_per_pixel as f64
}
