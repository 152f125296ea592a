//! Camera for ray generation and image rendering.

use std::time::Instant;

use crate::output::{OutputResult, PixelWriter};
use crate::renderer::render_pixel;
use crate::Hittable;
use lumen_core::CameraSettings;
use lumen_math::random::{gen_f64, random_in_unit_disk};
use lumen_math::{Point3, Ray, Vec3};
use rand::RngCore;

/// A positionable thin-lens camera.
///
/// Set the public configuration fields, then call [`Camera::render`]. The
/// viewport geometry is re-derived from the configuration at the start of
/// every render.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    /// Ideal ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Count of random samples for each pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    pub max_depth: u32,

    // Camera positioning
    /// Vertical view angle (field of view) in degrees
    pub vfov: f64,
    /// Point the camera is looking from
    pub look_from: Point3,
    /// Point the camera is looking at
    pub look_at: Point3,
    /// Camera-relative "up" direction
    pub vup: Vec3,

    // Lens settings
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f64,
    /// Distance from `look_from` to the plane of perfect focus
    pub focus_dist: f64,

    // Cached computed values (set by initialize())
    image_height: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// Create a camera from scene-file settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            aspect_ratio: settings.aspect_ratio,
            image_width: settings.image_width,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            vfov: settings.vfov,
            look_from: settings.look_from,
            look_at: settings.look_at,
            vup: settings.vup,
            defocus_angle: settings.defocus_angle,
            focus_dist: settings.focus_dist,
            image_height: 1,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
        }
    }

    /// Set image width and ideal aspect ratio.
    pub fn with_image(mut self, image_width: u32, aspect_ratio: f64) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Derive the viewport and sampling geometry from the configuration.
    ///
    /// `aspect_ratio` and `image_width` must be positive.
    pub fn initialize(&mut self) {
        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);
        self.center = self.look_from;

        // Viewport dimensions. The width uses the real pixel ratio, not the
        // ideal aspect_ratio, so the viewport matches the integer pixel grid.
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * self.u;
        let viewport_v = viewport_height * -self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        log::debug!(
            "Viewport {:.4}x{:.4} at focus distance {}, pixel00 {:?}, defocus radius {:.4}",
            viewport_width,
            viewport_height,
            self.focus_dist,
            self.pixel00_loc,
            defocus_radius
        );
    }

    /// Rendered image height, valid after [`Camera::initialize`].
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Camera center, valid after [`Camera::initialize`].
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Location of the center of pixel (i, j) on the focus plane.
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.pixel00_loc + (i as f64) * self.pixel_delta_u + (j as f64) * self.pixel_delta_v
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target point is jittered within the pixel square; the origin is
    /// sampled from the defocus disk when `defocus_angle > 0`.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + ((i as f64) + offset.x) * self.pixel_delta_u
            + ((j as f64) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Render the world, streaming each pixel to `writer`.
    ///
    /// Pixels are produced in row-major order, top row first. Blocks until
    /// the whole image is written.
    pub fn render(
        &mut self,
        world: &dyn Hittable,
        writer: &mut dyn PixelWriter,
        rng: &mut dyn RngCore,
    ) -> OutputResult<()> {
        self.initialize();

        log::info!(
            "Rendering {}x{} @ {} spp, max depth {}",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth
        );
        let start = Instant::now();

        writer.begin(self.image_width, self.image_height)?;
        for j in 0..self.image_height {
            log::debug!("Scanlines remaining: {}", self.image_height - j);
            for i in 0..self.image_width {
                let color = render_pixel(self, world, i, j, rng);
                writer.write_pixel(color)?;
            }
        }
        writer.finish()?;

        log::info!("Rendered in {:?}", start.elapsed());
        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a random point in the unit square [-0.5, 0.5) x [-0.5, 0.5).
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng) - 0.5, gen_f64(rng) - 0.5, 0.0)
}
