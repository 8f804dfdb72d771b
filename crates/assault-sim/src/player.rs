//! The player's ship: movement, firing cooldown, power-ups, and damage.

use glam::Vec2;

use assault_core::constants::*;
use assault_core::enums::PowerUpKind;
use assault_core::geometry::Rect;
use assault_core::input::{Control, InputSource};

use crate::bullets::BulletManager;

/// Result of [`Player::take_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still inside the post-hit grace period.
    Invulnerable,
    /// Shield took the hit.
    Shielded,
    /// A life was lost.
    Damaged,
}

impl DamageOutcome {
    pub fn is_damaged(self) -> bool {
        self == DamageOutcome::Damaged
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub lives: u32,
    pub shoot_cooldown: f32,
    /// Base cooldown between shots.
    pub shoot_rate: f32,
    pub invuln_time: f32,
    pub power_up: Option<PowerUpKind>,
    pub power_up_timer: f32,
    pub shield_hits: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CANVAS_W / 2.0, CANVAS_H - PLAYER_BOTTOM_OFFSET),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            lives: STARTING_LIVES,
            shoot_cooldown: 0.0,
            shoot_rate: DEFAULT_SHOOT_RATE,
            invuln_time: 0.0,
            power_up: None,
            power_up_timer: 0.0,
            shield_hits: 0,
        }
    }

    /// Restore every field to its starting value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move from input and run down every timer.
    pub fn update<I: InputSource + ?Sized>(&mut self, dt: f32, input: &I) {
        if input.is_down(Control::Left) {
            self.pos.x -= self.speed * dt;
        }
        if input.is_down(Control::Right) {
            self.pos.x += self.speed * dt;
        }
        let half = self.size.x / 2.0;
        self.pos.x = self.pos.x.clamp(half, CANVAS_W - half);

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }
        if self.invuln_time > 0.0 {
            self.invuln_time -= dt;
        }
        if self.power_up_timer > 0.0 {
            self.power_up_timer -= dt;
            if self.power_up_timer <= 0.0 {
                self.clear_power_up();
            }
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    /// Start the cooldown after a shot.
    pub fn on_shoot(&mut self) {
        let multiplier = self
            .power_up
            .map_or(1.0, |kind| kind.effect().cooldown_multiplier);
        self.shoot_cooldown = self.shoot_rate * multiplier;
    }

    /// Bullet velocities for one trigger pull.
    pub fn shot_pattern(&self) -> &'static [Vec2] {
        match self.power_up {
            Some(kind) => kind.effect().shot_pattern,
            None => &SINGLE_SHOT_VELOCITIES,
        }
    }

    /// Nose of the ship, where bullets appear.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.size.y / 2.0)
    }

    /// Fire the current pattern if the cooldown allows. Returns bullets spawned.
    pub fn fire(&mut self, bullets: &mut BulletManager) -> usize {
        if !self.can_shoot() {
            return 0;
        }
        self.on_shoot();
        let muzzle = self.muzzle();
        self.shot_pattern()
            .iter()
            .filter_map(|&velocity| bullets.spawn_player_bullet_with_velocity(muzzle, velocity))
            .count()
    }

    /// Activate `kind`, replacing whatever was active.
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        let effect = kind.effect();
        self.power_up = Some(kind);
        self.power_up_timer = POWERUP_DURATION;
        self.shield_hits = effect.shield_hits;
    }

    /// Timer expiry: drop an expiring power-up. A shield stays until its hits run out.
    pub fn clear_power_up(&mut self) {
        if self.power_up.is_some_and(|kind| kind.effect().expires) {
            self.power_up = None;
        }
        self.power_up_timer = 0.0;
    }

    /// Drop every power-up, shield included.
    pub fn clear_all_power_ups(&mut self) {
        self.power_up = None;
        self.power_up_timer = 0.0;
        self.shield_hits = 0;
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_time > 0.0
    }

    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.is_invulnerable() {
            return DamageOutcome::Invulnerable;
        }
        if self.power_up == Some(PowerUpKind::Shield) && self.shield_hits > 0 {
            self.shield_hits -= 1;
            if self.shield_hits == 0 {
                self.power_up = None;
            }
            return DamageOutcome::Shielded;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invuln_time = INVULN_DURATION;
        DamageOutcome::Damaged
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }
}
