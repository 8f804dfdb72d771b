//! Headless driver for the GALACTIC ASSAULT simulation.
//!
//! Loads configuration, persists the high score, feeds scripted input to
//! the round controller, and runs it on a fixed-timestep clock.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod high_score;
