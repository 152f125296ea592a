//! Lumen math - vectors, rays and intervals shared by every lumen crate.
//!
//! All geometry is double precision. `Vec3` is glam's `DVec3`, so the
//! usual arithmetic, `dot`, `cross`, `length` and `normalize` come for free.
//! `normalize` on a zero-length vector yields NaN components; callers must
//! not pass one.

pub use glam::{dvec3, DVec3};

mod interval;
mod ray;
pub mod random;

pub use interval::Interval;
pub use ray::Ray;

/// 3D vector (double precision).
pub type Vec3 = DVec3;

/// A location in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color, one component per channel.
pub type Color = DVec3;
