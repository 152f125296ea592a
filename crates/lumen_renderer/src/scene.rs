//! World assembly from a [`SceneDescription`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Absorber, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use lumen_core::{MaterialDesc, SceneDescription, SceneError, SceneResult};

/// Instantiate the scattering model a description names.
pub fn material_from_desc(desc: &MaterialDesc) -> Arc<dyn Material> {
    match *desc {
        MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDesc::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDesc::Dielectric { refraction_index } => Arc::new(Dielectric::new(refraction_index)),
        MaterialDesc::Absorber => Arc::new(Absorber),
    }
}

/// Build the intersectable world for a scene.
///
/// Each named material is created once and shared by every sphere that
/// uses it.
pub fn build_world(desc: &SceneDescription) -> SceneResult<HittableList> {
    let materials: HashMap<&str, Arc<dyn Material>> = desc
        .materials
        .iter()
        .map(|(name, material)| (name.as_str(), material_from_desc(material)))
        .collect();

    let mut world = HittableList::new();
    for sphere in &desc.spheres {
        let material = materials
            .get(sphere.material.as_str())
            .ok_or_else(|| SceneError::UnknownMaterial(sphere.material.clone()))?;
        world.add(Box::new(Sphere::new(sphere.center, sphere.radius, Arc::clone(material))));
    }

    log::debug!(
        "Built world: {} spheres sharing {} materials",
        world.len(),
        materials.len()
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HitRecord, Hittable};
    use lumen_core::SphereDesc;
    use lumen_math::{Color, Interval, Point3, Ray, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_three_spheres() {
        let world = build_world(&SceneDescription::three_spheres()).unwrap();
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn test_unknown_material() {
        let mut desc = SceneDescription::new();
        desc.add_sphere(SphereDesc::new(Point3::ZERO, 1.0, "missing"));

        assert!(matches!(
            build_world(&desc),
            Err(SceneError::UnknownMaterial(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_built_sphere_uses_its_material() {
        let mut desc = SceneDescription::new();
        desc.add_material("red", MaterialDesc::Lambertian { albedo: Color::new(0.9, 0.1, 0.1) });
        desc.add_sphere(SphereDesc::new(Point3::new(0.0, 0.0, -2.0), 0.5, "red"));
        let world = build_world(&desc).unwrap();

        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));

        let mut rng = StdRng::seed_from_u64(42);
        let scatter = rec.material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_eq!(scatter.attenuation, Color::new(0.9, 0.1, 0.1));
    }

    #[test]
    fn test_absorber_material() {
        let material = material_from_desc(&MaterialDesc::Absorber);
        let rec = HitRecord::default();
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
    }
}
