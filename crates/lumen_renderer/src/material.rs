//! Material trait for surface scattering.

use std::sync::Arc;

use crate::hittable::HitRecord;
use lumen_math::random::{gen_f64, random_unit_vector};
use lumen_math::{Color, Ray, Vec3};
use rand::RngCore;

/// Outcome of a ray that keeps travelling after hitting a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Per-channel factor applied to the light arriving along `scattered`
    pub attenuation: Color,
    /// The continuing ray, starting at the hit point
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some` if light continues along a new ray, or `None` if the
    /// ray is absorbed and the path ends.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter>;
}

/// Shared materials, e.g. one glass used by many spheres.
impl<M: Material + ?Sized> Material for Arc<M> {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        (**self).scatter(ray_in, rec, rng)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(Scatter {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_unit_vector(rng);

        // Fuzz can push the ray below the surface; absorb it then
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Refractive index in vacuum or air, or the ratio of the material's
    /// index over the index of the enclosing medium
    refraction_index: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;
        let direction = if cannot_refract || Self::reflectance(cos_theta, ri) > gen_f64(rng) {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, ri)
        };

        Some(Scatter {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Absorbs every ray. Surfaces using it render black.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absorber;

impl Material for Absorber {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord<'_>, _rng: &mut dyn RngCore) -> Option<Scatter> {
        None
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// True if the vector is close to zero in all dimensions.
#[inline]
pub(crate) fn near_zero(v: Vec3) -> bool {
    const S: f64 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with relative index `etai_over_etat`.
#[inline]
pub(crate) fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
