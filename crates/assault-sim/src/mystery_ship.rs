//! Bonus saucer that crosses the top of the screen on a random timer.

use glam::Vec2;
use rand::Rng;

use assault_core::constants::*;
use assault_core::geometry::Rect;

use crate::random;

#[derive(Debug, Clone, PartialEq)]
pub struct MysteryShip {
    pub x: f32,
    pub size: Vec2,
    pub active: bool,
    /// +1 left-to-right, -1 right-to-left.
    pub direction: f32,
    pub speed: f32,
    /// Bonus awarded if shot during the current pass.
    pub points: u32,
    /// Counts down while inactive.
    pub spawn_timer: f32,
    pub anim_phase: f32,
}

impl MysteryShip {
    /// Inactive ship with a freshly rolled spawn delay.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: 0.0,
            size: Vec2::new(MYSTERY_SHIP_WIDTH, MYSTERY_SHIP_HEIGHT),
            active: false,
            direction: 1.0,
            speed: 0.0,
            points: 0,
            spawn_timer: roll_spawn_delay(rng),
            anim_phase: 0.0,
        }
    }

    /// Deactivate and roll a new spawn delay.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.active = false;
        self.spawn_timer = roll_spawn_delay(rng);
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, MYSTERY_SHIP_Y)
    }

    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        if !self.active {
            self.spawn_timer -= dt;
            if self.spawn_timer <= 0.0 {
                self.spawn(rng);
            }
            return;
        }

        self.x += self.speed * self.direction * dt;
        self.anim_phase += dt;

        let exited = if self.direction > 0.0 {
            self.x > CANVAS_W + self.size.x
        } else {
            self.x < -self.size.x
        };
        if exited {
            self.reset(rng);
        }
    }

    /// Shot down: deactivate, restart the spawn timer, and return the bonus.
    pub fn hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        self.reset(rng);
        self.points
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position(), self.size)
    }

    fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.active = true;
        self.direction = if random::chance(rng, 0.5) { 1.0 } else { -1.0 };
        self.x = if self.direction > 0.0 {
            -self.size.x
        } else {
            CANVAS_W + self.size.x
        };
        self.speed = random::range(rng, MYSTERY_SHIP_SPEED_MIN, MYSTERY_SHIP_SPEED_MAX);
        self.points = MYSTERY_SHIP_POINTS[random::index(rng, MYSTERY_SHIP_POINTS.len())];
        self.anim_phase = 0.0;
        tracing::debug!(direction = self.direction, points = self.points, "mystery ship spawned");
    }
}

fn roll_spawn_delay<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    random::range(rng, MYSTERY_SHIP_SPAWN_MIN, MYSTERY_SHIP_SPAWN_MAX)
}
