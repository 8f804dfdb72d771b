//! Events emitted by the simulation for audio, visual effects, and persistence.
//!
//! The engine never calls out to a sound system, renderer, or storage
//! backend. It queues [`GameEvent`]s which the host drains once per tick
//! and forwards wherever they belong.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AudioCue, RoundState};

/// Particle burst request for the effects renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub position: Vec2,
    pub count: u32,
    /// 0xRRGGBB.
    pub color: u32,
    /// Initial particle speed (pixels per second).
    pub speed: f32,
    /// Particle lifetime (seconds).
    pub lifetime: f32,
    /// Particle size (pixels).
    pub size: f32,
}

/// Screen-shake request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeRequest {
    pub intensity: f32,
    pub duration: f32,
}

/// Everything the simulation tells the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Play a named sound.
    Audio { cue: AudioCue },
    /// Spawn a particle burst.
    Particles(ParticleBurst),
    /// Shake the screen.
    Shake(ShakeRequest),
    /// Write the high score to persistent storage.
    PersistHighScore { score: u32 },
    /// Round state machine moved.
    StateChanged { from: RoundState, to: RoundState },
    /// A new wave's formation was built.
    WaveStarted { wave: u32 },
}

impl GameEvent {
    pub fn audio(cue: AudioCue) -> Self {
        GameEvent::Audio { cue }
    }

    pub fn shake(intensity: f32, duration: f32) -> Self {
        GameEvent::Shake(ShakeRequest {
            intensity,
            duration,
        })
    }

    pub fn particles(position: Vec2, count: u32, color: u32, speed: f32, lifetime: f32, size: f32) -> Self {
        GameEvent::Particles(ParticleBurst {
            position,
            count,
            color,
            speed,
            lifetime,
            size,
        })
    }
}
