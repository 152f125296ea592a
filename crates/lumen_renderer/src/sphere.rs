//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;
use lumen_math::{Interval, Point3, Ray};

/// A sphere primitive.
pub struct Sphere<M: Material> {
    center: Point3,
    radius: f64,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f64, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        rec.material = &self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use lumen_math::{Color, Vec3};

    fn unit_sphere_ahead() -> Sphere<Lambertian> {
        Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::splat(0.5)),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert_eq!(rec.p, ray.at(rec.t));
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Point3::ZERO, 2.0, Lambertian::new(Color::ONE));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-12);
        assert!(!rec.front_face);
        // Normal is flipped to face the ray origin
        assert!((rec.normal - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sphere_boundary_is_excluded() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        // Roots at exactly t = 0.5 and t = 1.5 are not strictly inside
        assert!(!sphere.hit(&ray, Interval::new(0.5, 1.5), &mut rec));
    }

    #[test]
    fn test_negative_radius_is_clamped() {
        let sphere = Sphere::new(Point3::ZERO, -3.0, Lambertian::new(Color::ONE));
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(sphere.center(), Point3::ZERO);
    }
}
