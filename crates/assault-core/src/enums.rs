//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Round state (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    /// Countdown before play. Entities are idle.
    #[default]
    Ready,
    /// Normal play.
    Playing,
    /// Short pause after the player loses a life.
    Dying,
    /// Pause between a cleared wave and the next one.
    #[serde(rename = "nextwave")]
    NextWave,
    /// All lives lost; waiting for the shoot key.
    #[serde(rename = "gameover")]
    GameOver,
}

/// Collectible power-up type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// Shorter cooldown between shots.
    Rapid,
    /// Absorbs a fixed number of hits, never expires.
    Shield,
    /// Three-way spread shot.
    Spread,
}

/// What a power-up does to the player while it is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpEffect {
    /// Multiplier on the base shoot cooldown.
    pub cooldown_multiplier: f32,
    /// Hits absorbed before the effect ends (0 = none).
    pub shield_hits: u32,
    /// Whether the effect ends when its timer runs out.
    pub expires: bool,
    /// Velocities of the bullets fired per shot.
    pub shot_pattern: &'static [Vec2],
}

const RAPID_EFFECT: PowerUpEffect = PowerUpEffect {
    cooldown_multiplier: RAPID_FIRE_MULTIPLIER,
    shield_hits: 0,
    expires: true,
    shot_pattern: &SINGLE_SHOT_VELOCITIES,
};

const SHIELD_EFFECT: PowerUpEffect = PowerUpEffect {
    cooldown_multiplier: 1.0,
    shield_hits: SHIELD_HITS,
    expires: false,
    shot_pattern: &SINGLE_SHOT_VELOCITIES,
};

const SPREAD_EFFECT: PowerUpEffect = PowerUpEffect {
    cooldown_multiplier: 1.0,
    shield_hits: 0,
    expires: true,
    shot_pattern: &SPREAD_SHOT_VELOCITIES,
};

impl PowerUpKind {
    /// Every kind, in drop-table order.
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Rapid, PowerUpKind::Shield, PowerUpKind::Spread];

    /// Effect table entry for this kind.
    pub fn effect(self) -> &'static PowerUpEffect {
        match self {
            PowerUpKind::Rapid => &RAPID_EFFECT,
            PowerUpKind::Shield => &SHIELD_EFFECT,
            PowerUpKind::Spread => &SPREAD_EFFECT,
        }
    }

    /// Display color (0xRRGGBB).
    pub fn color(self) -> u32 {
        match self {
            PowerUpKind::Rapid => 0xffcc00,
            PowerUpKind::Shield => 0x00ff88,
            PowerUpKind::Spread => 0xff66ff,
        }
    }
}

/// Phase of a diving alien's attack run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivePhase {
    /// Falling toward the bottom edge with a sine weave.
    #[default]
    Descending,
    /// Re-entered from the top, steering back to its home slot.
    Returning,
}

/// Named audio cue for the external sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioCue {
    Shoot,
    Explosion,
    Hit,
    PowerUp,
    GameOver,
}
