//! Core types and definitions for the GALACTIC ASSAULT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, geometry primitives, input controls, events, and the
//! renderer-facing state snapshot. It has no engine logic and no RNG.

pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod input;
pub mod state;
