//! Alien formation: grid layout, sway, aimed shots, and dive attacks.
//!
//! Aliens are never removed from the formation. `alive = false` is a
//! tombstone, and dead aliens are skipped by every update and collision.

use glam::Vec2;
use rand::Rng;

use assault_core::constants::*;
use assault_core::enums::DivePhase;
use assault_core::geometry::Rect;

use crate::bullets::BulletSink;
use crate::random;

/// Parameters of an alien's attack run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dive {
    pub phase: DivePhase,
    /// Weave anchor while descending.
    pub pos: Vec2,
    /// Weave angle (radians).
    pub angle: f32,
    /// Descent speed (pixels per second).
    pub speed: f32,
}

/// Where an alien is flying.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AlienMotion {
    /// Tracking its home slot plus the formation sway.
    #[default]
    Formation,
    Diving(Dive),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
    /// Visual class and point row (equal to the grid row).
    pub alien_type: u8,
    pub col: usize,
    pub row: usize,
    /// Pre-sway anchor.
    pub home: Vec2,
    pub motion: AlienMotion,
    pub hp: u32,
    pub max_hp: u32,
    pub hit_flash: f32,
    pub anim_phase: f32,
}

impl Alien {
    pub fn is_diving(&self) -> bool {
        matches!(self.motion, AlienMotion::Diving(_))
    }

    pub fn dive_phase(&self) -> Option<DivePhase> {
        match self.motion {
            AlienMotion::Diving(dive) => Some(dive.phase),
            AlienMotion::Formation => None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Take one point of damage. Returns `true` when the hit was fatal.
    pub fn hit(&mut self) -> bool {
        self.hp = self.hp.saturating_sub(1);
        self.hit_flash = HIT_FLASH_DURATION;
        if self.hp == 0 {
            self.kill();
            true
        } else {
            false
        }
    }

    /// Mark dead and drop any dive in progress.
    pub fn kill(&mut self) {
        self.alive = false;
        self.motion = AlienMotion::Formation;
    }

    fn advance_dive(&mut self, dt: f32, sway_offset: f32) {
        let AlienMotion::Diving(dive) = &mut self.motion else {
            return;
        };
        let phase = dive.phase;
        match phase {
            DivePhase::Descending => {
                dive.angle += dt * DIVE_WEAVE_RATE;
                dive.pos.x += dive.angle.sin() * DIVE_WEAVE_AMPLITUDE * dt;
                dive.pos.y += dive.speed * dt;
                self.pos = dive.pos;
                if self.pos.y > DIVE_EXIT_Y {
                    self.pos.y = DIVE_REENTRY_Y;
                    dive.phase = DivePhase::Returning;
                    dive.pos = self.pos;
                }
            }
            DivePhase::Returning => {
                let target = Vec2::new(self.home.x + sway_offset, self.home.y);
                let to_home = target - self.pos;
                let distance = to_home.length();
                if distance < DIVE_SNAP_DISTANCE {
                    self.pos = target;
                    self.motion = AlienMotion::Formation;
                } else {
                    self.pos += to_home / distance * DIVE_RETURN_SPEED * dt;
                }
            }
        }
    }
}

/// Points for killing an alien of `alien_type`.
pub fn points_for_type(alien_type: u8) -> u32 {
    ALIEN_POINTS
        .get(usize::from(alien_type))
        .copied()
        .unwrap_or(FALLBACK_ALIEN_POINTS)
}

/// Hit points for a fresh alien in `row` on `wave`.
pub fn armor_for(row: usize, wave: u32) -> u32 {
    let armored = match u8::try_from(row) {
        Ok(COMMANDER_TYPE) => wave >= COMMANDER_ARMOR_WAVE,
        Ok(WARRIOR_TYPE) => wave >= WARRIOR_ARMOR_WAVE,
        _ => false,
    };
    if armored {
        2
    } else {
        1
    }
}

/// The alien grid and its per-wave difficulty parameters.
#[derive(Debug, Clone)]
pub struct AlienFormation {
    pub aliens: Vec<Alien>,
    pub wave: u32,
    pub sway_offset: f32,
    pub sway_speed: f32,
    /// +1 right, -1 left.
    pub sway_dir: f32,
    pub shoot_timer: f32,
    pub shoot_interval: f32,
    pub dive_timer: f32,
    pub dive_interval: f32,
    pub group_dive_chance: f32,
}

impl AlienFormation {
    /// Build the formation for `wave` (1-based).
    pub fn new(wave: u32) -> Self {
        let mut formation = Self {
            aliens: Vec::with_capacity(FORMATION_COLS * FORMATION_ROWS),
            wave,
            sway_offset: 0.0,
            sway_speed: 0.0,
            sway_dir: 1.0,
            shoot_timer: 0.0,
            shoot_interval: 0.0,
            dive_timer: 0.0,
            dive_interval: 0.0,
            group_dive_chance: 0.0,
        };
        formation.init(wave);
        formation
    }

    /// Rebuild the grid and recompute difficulty for `wave`.
    pub fn init(&mut self, wave: u32) {
        let steps = wave.saturating_sub(1) as f32;
        self.wave = wave;
        self.sway_offset = 0.0;
        self.sway_dir = 1.0;
        self.sway_speed = BASE_SWAY_SPEED + steps * SWAY_SPEED_PER_WAVE;
        self.shoot_interval = (BASE_SHOOT_INTERVAL - steps * SHOOT_INTERVAL_PER_WAVE).max(MIN_SHOOT_INTERVAL);
        self.dive_interval = (BASE_DIVE_INTERVAL - steps * DIVE_INTERVAL_PER_WAVE).max(MIN_DIVE_INTERVAL);
        self.group_dive_chance = (steps * GROUP_DIVE_CHANCE_PER_WAVE).min(MAX_GROUP_DIVE_CHANCE);
        self.shoot_timer = 0.0;
        self.dive_timer = INITIAL_DIVE_DELAY;

        let start_x = (CANVAS_W - (FORMATION_COLS - 1) as f32 * ALIEN_SPACING_X) / 2.0;
        self.aliens.clear();
        for row in 0..FORMATION_ROWS {
            for col in 0..FORMATION_COLS {
                let home = Vec2::new(
                    start_x + col as f32 * ALIEN_SPACING_X,
                    FORMATION_TOP + row as f32 * ALIEN_SPACING_Y,
                );
                let hp = armor_for(row, wave);
                self.aliens.push(Alien {
                    pos: home,
                    size: Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT),
                    alive: true,
                    alien_type: row as u8,
                    col,
                    row,
                    home,
                    motion: AlienMotion::Formation,
                    hp,
                    max_hp: hp,
                    hit_flash: 0.0,
                    anim_phase: 0.0,
                });
            }
        }

        tracing::debug!(
            wave,
            sway_speed = self.sway_speed,
            shoot_interval = self.shoot_interval,
            dive_interval = self.dive_interval,
            group_dive_chance = self.group_dive_chance,
            "formation initialised"
        );
    }

    pub fn alive_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    pub fn points_for(&self, alien: &Alien) -> u32 {
        points_for_type(alien.alien_type)
    }

    /// Advance one tick: sway, per-alien motion, shooting, then dive triggers.
    pub fn update<S, R>(&mut self, dt: f32, sink: &mut S, player_x: f32, rng: &mut R)
    where
        S: BulletSink + ?Sized,
        R: Rng + ?Sized,
    {
        // 1. Sway, bouncing off the side margins
        self.sway_offset += self.sway_speed * self.sway_dir * dt;
        if let Some((left, right)) = self.formation_extent() {
            if right + self.sway_offset > CANVAS_W - SWAY_MARGIN {
                self.sway_dir = -1.0;
            } else if left + self.sway_offset < SWAY_MARGIN {
                self.sway_dir = 1.0;
            }
        }

        // 2. Per-alien motion and timers
        let sway_offset = self.sway_offset;
        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            if alien.is_diving() {
                alien.advance_dive(dt, sway_offset);
            } else {
                alien.pos.x = alien.home.x + sway_offset;
            }
            alien.anim_phase += dt * ALIEN_ANIM_RATE;
            if alien.hit_flash > 0.0 {
                alien.hit_flash -= dt;
            }
        }

        // 3. Aimed shots
        self.shoot_timer -= dt;
        if self.shoot_timer <= 0.0 {
            self.shoot_timer = self.shoot_interval;
            self.fire(sink, player_x, rng);
        }

        // 4. Dive attacks
        self.dive_timer -= dt;
        if self.dive_timer <= 0.0 {
            self.dive_timer = self.dive_interval;
            self.trigger_dive(player_x, rng);
        }
    }

    /// Min and max home-x extent of alive formation aliens.
    fn formation_extent(&self) -> Option<(f32, f32)> {
        self.aliens
            .iter()
            .filter(|a| a.alive && !a.is_diving())
            .fold(None, |extent, a| {
                let left = a.home.x - a.size.x / 2.0;
                let right = a.home.x + a.size.x / 2.0;
                Some(match extent {
                    Some((l, r)) => (f32::min(l, left), f32::max(r, right)),
                    None => (left, right),
                })
            })
    }

    /// Lowest alive, non-diving alien of every occupied column, in column order.
    pub fn bottom_shooters(&self) -> Vec<usize> {
        let mut lowest: Vec<Option<usize>> = vec![None; FORMATION_COLS];
        for (index, alien) in self.aliens.iter().enumerate() {
            if !alien.alive || alien.is_diving() {
                continue;
            }
            if alien.col >= lowest.len() {
                lowest.resize(alien.col + 1, None);
            }
            let slot = &mut lowest[alien.col];
            match *slot {
                Some(current) if self.aliens[current].row >= alien.row => {}
                _ => *slot = Some(index),
            }
        }
        lowest.into_iter().flatten().collect()
    }

    fn fire<S, R>(&self, sink: &mut S, player_x: f32, rng: &mut R)
    where
        S: BulletSink + ?Sized,
        R: Rng + ?Sized,
    {
        let shooters = self.bottom_shooters();
        if shooters.is_empty() {
            return;
        }
        let shooter = &self.aliens[shooters[random::index(rng, shooters.len())]];
        let aim = Vec2::new(player_x, ALIEN_AIM_Y) - shooter.pos;
        let velocity = aim.normalize_or_zero() * ALIEN_BULLET_SPEED;
        let muzzle = Vec2::new(shooter.pos.x, shooter.pos.y + shooter.size.y / 2.0);
        tracing::trace!(col = shooter.col, row = shooter.row, "alien fires");
        sink.spawn_alien_bullet(muzzle, velocity);
    }

    fn trigger_dive<R: Rng + ?Sized>(&mut self, player_x: f32, rng: &mut R) {
        let candidates: Vec<usize> = self
            .aliens
            .iter()
            .enumerate()
            .filter(|(_, a)| a.alive && !a.is_diving())
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return;
        }

        let grouped = random::chance(rng, self.group_dive_chance);
        let group_size = if grouped {
            MAX_GROUP_DIVE_SIZE.min(candidates.len())
        } else {
            1
        };
        let first = candidates[random::index(rng, candidates.len())];

        let mut divers = vec![first];
        if group_size > 1 {
            let (row, col) = (self.aliens[first].row, self.aliens[first].col);
            let mut neighbours: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&i| {
                    let a = &self.aliens[i];
                    i != first && a.row.abs_diff(row) <= 1 && a.col.abs_diff(col) <= 1
                })
                .collect();
            while divers.len() < group_size && !neighbours.is_empty() {
                let pick = random::index(rng, neighbours.len());
                divers.push(neighbours.swap_remove(pick));
            }
        }

        for (slot, &index) in divers.iter().enumerate() {
            let speed = random::range(rng, DIVE_SPEED_MIN, DIVE_SPEED_MAX);
            let alien = &mut self.aliens[index];
            alien.motion = AlienMotion::Diving(Dive {
                phase: DivePhase::Descending,
                pos: alien.pos,
                angle: (player_x - alien.pos.x) * DIVE_PLAYER_BIAS + slot as f32 * GROUP_DIVE_ANGLE_STEP,
                speed,
            });
        }
        tracing::debug!(divers = divers.len(), grouped, "dive triggered");
    }
}
