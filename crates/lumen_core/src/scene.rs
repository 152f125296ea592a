//! Scene description types for lumen.
//!
//! A scene is plain data: camera settings, a table of named materials and a
//! list of spheres referring to those materials by name. The renderer turns
//! it into intersectable geometry; nothing here knows how to trace a ray.

use std::collections::BTreeMap;

use lumen_math::random::{gen_f64, gen_range, random_vec3, random_vec3_range};
use lumen_math::{Color, Point3, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// User-facing camera configuration.
///
/// Every field is optional in a scene file; missing fields fall back to
/// [`CameraSettings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Ideal width over height. The rendered height is rounded down from it.
    pub aspect_ratio: f64,
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Random samples per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    pub look_from: Point3,
    pub look_at: Point3,
    /// Camera-relative "up" direction
    pub vup: Vec3,
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f64,
    /// Distance from `look_from` to the plane of perfect focus
    pub focus_dist: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            look_from: Point3::new(0.0, 0.0, -1.0),
            look_at: Point3::ZERO,
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

/// A scattering model and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDesc {
    /// Ideal diffuse reflector
    Lambertian { albedo: Color },
    /// Reflective metal; `fuzz` 0 is a perfect mirror
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f64,
    },
    /// Clear refractive material such as glass or water
    Dielectric { refraction_index: f64 },
    /// Absorbs every ray that hits it
    Absorber,
}

/// A sphere referring to a material by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Point3,
    pub radius: f64,
    pub material: String,
}

impl SphereDesc {
    pub fn new(center: Point3, radius: f64, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// Complete description of a renderable scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraSettings,
    /// Materials keyed by name. Ordered so world assembly is deterministic.
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with default camera settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material under `name`, replacing any previous one.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDesc) {
        self.materials.insert(name.into(), material);
    }

    /// Add a sphere using a previously registered material.
    pub fn add_sphere(&mut self, sphere: SphereDesc) {
        self.spheres.push(sphere);
    }

    /// Names of materials referenced by spheres but never defined.
    pub fn missing_materials(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .spheres
            .iter()
            .map(|s| s.material.as_str())
            .filter(|name| !self.materials.contains_key(*name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Ground plane plus a diffuse, a hollow glass and a fuzzy metal sphere.
    pub fn three_spheres() -> Self {
        let mut scene = Self {
            camera: CameraSettings {
                aspect_ratio: 16.0 / 9.0,
                image_width: 400,
                samples_per_pixel: 100,
                max_depth: 50,
                vfov: 20.0,
                look_from: Point3::new(-2.0, 2.0, 1.0),
                look_at: Point3::new(0.0, 0.0, -1.0),
                vup: Vec3::Y,
                defocus_angle: 10.0,
                focus_dist: 3.4,
            },
            ..Self::default()
        };

        scene.add_material("ground", MaterialDesc::Lambertian { albedo: Color::new(0.8, 0.8, 0.0) });
        scene.add_material("center", MaterialDesc::Lambertian { albedo: Color::new(0.1, 0.2, 0.5) });
        scene.add_material("glass", MaterialDesc::Dielectric { refraction_index: 1.5 });
        scene.add_material("bubble", MaterialDesc::Dielectric { refraction_index: 1.0 / 1.5 });
        scene.add_material(
            "gold",
            MaterialDesc::Metal { albedo: Color::new(0.8, 0.6, 0.2), fuzz: 1.0 },
        );

        scene.add_sphere(SphereDesc::new(Point3::new(0.0, -100.5, -1.0), 100.0, "ground"));
        scene.add_sphere(SphereDesc::new(Point3::new(0.0, 0.0, -1.2), 0.5, "center"));
        scene.add_sphere(SphereDesc::new(Point3::new(-1.0, 0.0, -1.0), 0.5, "glass"));
        scene.add_sphere(SphereDesc::new(Point3::new(-1.0, 0.0, -1.0), 0.4, "bubble"));
        scene.add_sphere(SphereDesc::new(Point3::new(1.0, 0.0, -1.0), 0.5, "gold"));
        scene
    }

    /// The classic cover scene: a 22x22 grid of small random spheres around
    /// three large feature spheres.
    pub fn random_spheres(rng: &mut dyn RngCore) -> Self {
        let mut scene = Self {
            camera: CameraSettings {
                aspect_ratio: 16.0 / 9.0,
                image_width: 400,
                samples_per_pixel: 50,
                max_depth: 50,
                vfov: 20.0,
                look_from: Point3::new(13.0, 2.0, 3.0),
                look_at: Point3::ZERO,
                vup: Vec3::Y,
                defocus_angle: 0.6,
                focus_dist: 10.0,
            },
            ..Self::default()
        };

        scene.add_material("ground", MaterialDesc::Lambertian { albedo: Color::splat(0.5) });
        scene.add_sphere(SphereDesc::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, "ground"));

        // Shared by every small glass sphere
        scene.add_material("glass", MaterialDesc::Dielectric { refraction_index: 1.5 });

        for a in -11..11 {
            for b in -11..11 {
                let choose_mat = gen_f64(rng);
                let center = Point3::new(
                    a as f64 + 0.9 * gen_f64(rng),
                    0.2,
                    b as f64 + 0.9 * gen_f64(rng),
                );

                // Keep clear of the large metal sphere
                if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                    continue;
                }

                let name = if choose_mat < 0.8 {
                    let albedo = random_vec3(rng) * random_vec3(rng);
                    let name = format!("diffuse_{a}_{b}");
                    scene.add_material(name.clone(), MaterialDesc::Lambertian { albedo });
                    name
                } else if choose_mat < 0.95 {
                    let albedo = random_vec3_range(rng, 0.5, 1.0);
                    let fuzz = gen_range(rng, 0.0, 0.5);
                    let name = format!("metal_{a}_{b}");
                    scene.add_material(name.clone(), MaterialDesc::Metal { albedo, fuzz });
                    name
                } else {
                    "glass".to_string()
                };

                scene.add_sphere(SphereDesc::new(center, 0.2, name));
            }
        }

        scene.add_material("brown", MaterialDesc::Lambertian { albedo: Color::new(0.4, 0.2, 0.1) });
        scene.add_material(
            "mirror",
            MaterialDesc::Metal { albedo: Color::new(0.7, 0.6, 0.5), fuzz: 0.0 },
        );

        scene.add_sphere(SphereDesc::new(Point3::new(0.0, 1.0, 0.0), 1.0, "glass"));
        scene.add_sphere(SphereDesc::new(Point3::new(-4.0, 1.0, 0.0), 1.0, "brown"));
        scene.add_sphere(SphereDesc::new(Point3::new(4.0, 1.0, 0.0), 1.0, "mirror"));
        scene
    }
}
