//! Hittable trait and HitRecord for ray-object intersection.

use crate::material::{Absorber, Material};
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Static material instance for `HitRecord::default()`.
static DEFAULT_MATERIAL: Absorber = Absorber;

/// Record of a ray-object intersection.
///
/// The material is borrowed from the object that was hit, so a record can
/// never outlive the world it came from.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Ray parameter where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Point3::ZERO,
            normal: Vec3::ZERO,
            material: &DEFAULT_MATERIAL,
            t: 0.0,
            front_face: false,
        }
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("t", &self.t)
            .field("front_face", &self.front_face)
            .finish_non_exhaustive()
    }
}

impl<'a> HitRecord<'a> {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// `outward_normal` must be unit length. The stored normal always points
    /// against the ray, so `front_face` records which side was hit.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object at some `t` strictly inside `ray_t`.
    ///
    /// Returns true if hit and fills in every field of `rec`, with `rec.t`
    /// set to the hit parameter. On a miss the contents of `rec` are
    /// unspecified.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}

/// A list of hittable objects resolving to the nearest hit.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            // A child that misses may scribble on its record, so each one
            // gets a scratch copy.
            let mut temp = HitRecord::default();
            if object.hit(ray, Interval::new(ray_t.min, closest_so_far), &mut temp) {
                hit_anything = true;
                closest_so_far = temp.t;
                *rec = temp;
            }
        }

        hit_anything
    }
}
