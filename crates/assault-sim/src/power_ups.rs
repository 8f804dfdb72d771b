//! Falling power-up pickups dropped by killed aliens.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use assault_core::constants::*;
use assault_core::enums::PowerUpKind;
use assault_core::geometry::Rect;

use crate::pool::ObjectPool;
use crate::random;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpItem {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Fall speed (pixels per second).
    pub vy: f32,
    /// Half-extent of the pickup box.
    pub size: f32,
    /// Visual bob angle (radians).
    pub bob_phase: f32,
}

impl Default for PowerUpItem {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            kind: PowerUpKind::Rapid,
            vy: POWERUP_FALL_SPEED,
            size: POWERUP_SIZE,
            bob_phase: 0.0,
        }
    }
}

impl PowerUpItem {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(self.size * 2.0))
    }
}

#[derive(Debug, Clone)]
pub struct PowerUpManager {
    pub pool: ObjectPool<PowerUpItem>,
}

impl Default for PowerUpManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerUpManager {
    pub fn new() -> Self {
        Self {
            pool: ObjectPool::new(POWERUP_CAPACITY, PowerUpItem::default),
        }
    }

    /// Maybe drop a power-up at `position`. Returns the kind that dropped.
    pub fn spawn<R: Rng + ?Sized>(&mut self, position: Vec2, rng: &mut R) -> Option<PowerUpKind> {
        if !random::chance(rng, POWERUP_SPAWN_CHANCE) {
            return None;
        }
        let (_, item) = self.pool.acquire()?;
        let kind = PowerUpKind::ALL[random::index(rng, PowerUpKind::ALL.len())];
        *item = PowerUpItem {
            pos: position,
            kind,
            vy: POWERUP_FALL_SPEED,
            size: POWERUP_SIZE,
            bob_phase: random::unit(rng) * TAU,
        };
        tracing::trace!(?kind, "power-up dropped");
        Some(kind)
    }

    /// Fall, bob, and release anything below the bottom margin.
    pub fn update(&mut self, dt: f32) {
        self.pool.for_each_active_mut(|_, item| {
            item.pos.y += item.vy * dt;
            item.bob_phase += dt * POWERUP_BOB_RATE;
        });
        self.pool
            .release_if(|item| item.pos.y > CANVAS_H + POWERUP_DESPAWN_MARGIN);
    }

    pub fn reset(&mut self) {
        self.pool.release_all();
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }
}
