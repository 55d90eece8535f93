//! Test support library
//! Provides seeded generators and sampling helpers shared by the integration tests.
#![allow(dead_code)]

use orient3::{
    Quaternion, Vector3,
    float_types::{PI, Real},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// How many random cases each property test checks.
pub const SAMPLES: usize = 200;

/// A generator with a fixed seed, so failures reproduce.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0123_4567_89ab_cdef)
}

/// A random vector that is comfortably far from zero, usable as a rotation axis.
pub fn random_axis(rng: &mut StdRng) -> Vector3 {
    loop {
        let v = Vector3::random_with(rng);
        if v.length() > 0.1 {
            return v;
        }
    }
}

/// A random angle in `[-π, π)`.
pub fn random_angle(rng: &mut StdRng) -> Real {
    rng.random_range(-PI..PI)
}

pub fn random_unit_quaternion(rng: &mut StdRng) -> Quaternion {
    Quaternion::random_rotation_with(rng)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
