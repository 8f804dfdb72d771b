//! Player and alien bullets, each kept in its own fixed pool.

use glam::Vec2;

use assault_core::constants::*;
use assault_core::geometry::Rect;

use crate::pool::ObjectPool;

/// A single projectile. Owner is implied by the pool it lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// 0xRRGGBB.
    pub color: u32,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: PLAYER_BULLET_SIZE,
            color: PLAYER_BULLET_COLOR,
        }
    }
}

impl Bullet {
    /// Centered bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Enlarged box used when an alien bullet is tested against the player.
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, self.size * ALIEN_BULLET_HITBOX_SCALE)
    }

    fn off_screen(&self) -> bool {
        self.pos.y < -BULLET_OFF_SCREEN_MARGIN || self.pos.y > CANVAS_H + BULLET_OFF_SCREEN_MARGIN
    }
}

/// Anything that can accept alien shots.
pub trait BulletSink {
    fn spawn_alien_bullet(&mut self, position: Vec2, velocity: Vec2);
}

/// Owns both bullet pools.
#[derive(Debug, Clone)]
pub struct BulletManager {
    pub player_bullets: ObjectPool<Bullet>,
    pub alien_bullets: ObjectPool<Bullet>,
}

impl Default for BulletManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletManager {
    pub fn new() -> Self {
        Self {
            player_bullets: ObjectPool::new(PLAYER_BULLET_CAPACITY, Bullet::default),
            alien_bullets: ObjectPool::new(ALIEN_BULLET_CAPACITY, Bullet::default),
        }
    }

    /// Fire a straight-up player shot. Silently dropped when the pool is full.
    pub fn spawn_player_bullet(&mut self, position: Vec2) -> Option<usize> {
        self.spawn_player_bullet_with_velocity(position, Vec2::new(0.0, PLAYER_BULLET_SPEED))
    }

    pub fn spawn_player_bullet_with_velocity(&mut self, position: Vec2, velocity: Vec2) -> Option<usize> {
        let (index, bullet) = self.player_bullets.acquire()?;
        *bullet = Bullet {
            pos: position,
            vel: velocity,
            size: PLAYER_BULLET_SIZE,
            color: PLAYER_BULLET_COLOR,
        };
        Some(index)
    }

    pub fn spawn_alien(&mut self, position: Vec2, velocity: Vec2) -> Option<usize> {
        let (index, bullet) = self.alien_bullets.acquire()?;
        *bullet = Bullet {
            pos: position,
            vel: velocity,
            size: ALIEN_BULLET_SIZE,
            color: ALIEN_BULLET_COLOR,
        };
        Some(index)
    }

    /// Integrate both pools and drop anything that left the playfield.
    pub fn update(&mut self, dt: f32) {
        for pool in [&mut self.player_bullets, &mut self.alien_bullets] {
            pool.for_each_active_mut(|_, b| b.pos += b.vel * dt);
            pool.release_if(Bullet::off_screen);
        }
    }

    /// Release every bullet in both pools.
    pub fn reset(&mut self) {
        self.player_bullets.release_all();
        self.alien_bullets.release_all();
    }
}

impl BulletSink for BulletManager {
    fn spawn_alien_bullet(&mut self, position: Vec2, velocity: Vec2) {
        if self.spawn_alien(position, velocity).is_none() {
            tracing::trace!("alien bullet pool exhausted, shot dropped");
        }
    }
}
