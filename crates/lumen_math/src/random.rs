//! Sampling helpers for ray jitter, depth of field and scattering.
//!
//! Every function draws from the generator it is handed. Nothing here owns
//! a global random source, so a render is reproducible from its seed.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Random f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Random f64 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Vector with every component in [0, 1).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with every component in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Uniform point strictly inside the unit disk in the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_range(rng, -1.0, 1.0), gen_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform direction on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    // Rejecting tiny samples keeps the normalization away from 0/0.
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        let len_sq = p.length_squared();
        if 1e-160 < len_sq && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Uniform direction on the hemisphere around `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}
