//! Game state snapshot: the complete visible state handed to a renderer each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: RoundState,
    /// Seconds spent in the current state.
    pub state_timer: f32,
    pub wave: u32,
    pub score: u32,
    pub high_score: u32,
    pub player: PlayerView,
    pub aliens: Vec<AlienView>,
    pub player_bullets: Vec<BulletView>,
    pub alien_bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub mystery_ship: Option<MysteryShipView>,
}

/// Player ship for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub invulnerable: bool,
    pub power_up: Option<PowerUpKind>,
    /// Seconds left on an expiring power-up.
    pub power_up_timer: f32,
    pub shield_hits: u32,
}

/// A living alien.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienView {
    pub position: Vec2,
    pub size: Vec2,
    pub alien_type: u8,
    pub hp: u32,
    pub max_hp: u32,
    /// Flash white while positive.
    pub hit_flash: f32,
    pub anim_phase: f32,
    pub dive: Option<DivePhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub size: Vec2,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Vec2,
    pub kind: PowerUpKind,
    pub bob_phase: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysteryShipView {
    pub position: Vec2,
    pub size: Vec2,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
}
