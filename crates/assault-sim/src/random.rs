//! Uniform random draws used by the simulation.
//!
//! Every random decision is a single `f32` draw in `[0, 1)`, so a given
//! seed (or a scripted test source) maps to exactly one outcome.

use rand::Rng;

/// Uniform value in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

/// Uniform value in `[min, max)`.
pub fn range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + unit(rng) * (max - min)
}

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    ((unit(rng) * len as f32) as usize).min(len.saturating_sub(1))
}

/// True with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    unit(rng) < p
}
