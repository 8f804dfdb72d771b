//! Simulation engine for GALACTIC ASSAULT.
//!
//! Owns every entity manager, runs them at a fixed step, resolves
//! collisions, and produces `GameSnapshot`s for a renderer. Completely
//! headless, with a single seeded RNG, enabling deterministic testing.

pub mod bullets;
pub mod clock;
pub mod engine;
pub mod formation;
pub mod mystery_ship;
pub mod player;
pub mod pool;
pub mod power_ups;
pub mod random;
pub mod systems;

pub use engine::{RoundController, SimConfig, TickStatus};

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;
