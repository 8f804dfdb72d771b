//! Round controller: the top-level state machine of the game.
//!
//! `RoundController` owns every entity manager and the seeded RNG, steps
//! them in a fixed order each tick, runs the collision pass, and drives
//! the ready/playing/dying/nextwave/gameover cycle. Completely headless.
//! Audio, effects, and high-score writes leave as queued [`GameEvent`]s.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use assault_core::constants::*;
use assault_core::enums::{AudioCue, RoundState};
use assault_core::events::GameEvent;
use assault_core::input::{Control, InputSource};
use assault_core::state::GameSnapshot;

use crate::bullets::BulletManager;
use crate::formation::AlienFormation;
use crate::mystery_ship::MysteryShip;
use crate::player::Player;
use crate::power_ups::PowerUpManager;
use crate::systems;
use crate::systems::collision::CollisionTargets;
use crate::systems::snapshot::RoundInfo;

/// Configuration for starting a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Previously persisted high score.
    pub high_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            high_score: 0,
        }
    }
}

/// Whether the host should keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    /// The exit control was pressed; nothing else ran this tick.
    Exit,
}

pub struct RoundController {
    rng: ChaCha8Rng,
    player: Player,
    bullets: BulletManager,
    formation: AlienFormation,
    mystery_ship: MysteryShip,
    power_ups: PowerUpManager,
    state: RoundState,
    state_timer: f32,
    dying_timer: f32,
    wave: u32,
    score: u32,
    high_score: u32,
    events: Vec<GameEvent>,
}

impl RoundController {
    /// Build a fresh game in the `ready` state.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mystery_ship = MysteryShip::new(&mut rng);
        let mut controller = Self {
            rng,
            player: Player::new(),
            bullets: BulletManager::new(),
            formation: AlienFormation::new(1),
            mystery_ship,
            power_ups: PowerUpManager::new(),
            state: RoundState::Ready,
            state_timer: 0.0,
            dying_timer: 0.0,
            wave: 1,
            score: 0,
            high_score: config.high_score,
            events: Vec::new(),
        };
        controller.reset_game();
        controller
    }

    /// Start over from wave 1 with a zero score. The high score is kept.
    pub fn reset_game(&mut self) {
        self.player.reset();
        self.bullets.reset();
        self.wave = 1;
        self.formation.init(self.wave);
        self.power_ups.reset();
        self.mystery_ship.reset(&mut self.rng);
        self.score = 0;
        self.dying_timer = 0.0;
        self.state_timer = 0.0;
        self.events.push(GameEvent::WaveStarted { wave: self.wave });
        tracing::info!(high_score = self.high_score, "new game");
    }

    /// Advance one fixed step.
    pub fn update<I: InputSource + ?Sized>(&mut self, dt: f32, input: &mut I) -> TickStatus {
        if input.just_pressed(Control::Exit) {
            tracing::info!(state = ?self.state, "exit requested");
            input.end_frame();
            return TickStatus::Exit;
        }

        self.state_timer += dt;
        match self.state {
            RoundState::Ready => {
                if input.just_pressed(Control::Shoot) || self.state_timer > READY_DURATION {
                    self.transition(RoundState::Playing);
                }
            }
            RoundState::Playing => self.update_playing(dt, &*input),
            RoundState::Dying => {
                self.dying_timer -= dt;
                if self.dying_timer <= 0.0 {
                    if self.player.lives == 0 {
                        self.transition(RoundState::GameOver);
                        self.persist_high_score();
                        self.events.push(GameEvent::audio(AudioCue::GameOver));
                    } else {
                        self.transition(RoundState::Playing);
                    }
                }
            }
            RoundState::NextWave => {
                if self.state_timer > NEXT_WAVE_DURATION {
                    self.start_next_wave();
                    self.transition(RoundState::Playing);
                }
            }
            RoundState::GameOver => {
                if input.just_pressed(Control::Shoot) && self.state_timer > GAME_OVER_INPUT_DELAY {
                    self.reset_game();
                    self.transition(RoundState::Ready);
                }
            }
        }

        input.end_frame();
        TickStatus::Continue
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a renderer snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build_snapshot(
            RoundInfo {
                state: self.state,
                state_timer: self.state_timer,
                wave: self.wave,
                score: self.score,
                high_score: self.high_score,
            },
            &self.player,
            &self.formation,
            &self.bullets.player_bullets,
            &self.bullets.alien_bullets,
            &self.power_ups,
            &self.mystery_ship,
        )
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Seconds spent in the current state.
    pub fn state_timer(&self) -> f32 {
        self.state_timer
    }

    pub fn dying_timer(&self) -> f32 {
        self.dying_timer
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn formation(&self) -> &AlienFormation {
        &self.formation
    }

    pub fn bullets(&self) -> &BulletManager {
        &self.bullets
    }

    pub fn power_ups(&self) -> &PowerUpManager {
        &self.power_ups
    }

    pub fn mystery_ship(&self) -> &MysteryShip {
        &self.mystery_ship
    }

    /// Jump straight into `state` (for tests).
    #[cfg(test)]
    pub fn force_state(&mut self, state: RoundState) {
        self.state = state;
        self.state_timer = 0.0;
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn bullets_mut(&mut self) -> &mut BulletManager {
        &mut self.bullets
    }

    #[cfg(test)]
    pub fn formation_mut(&mut self) -> &mut AlienFormation {
        &mut self.formation
    }

    #[cfg(test)]
    pub fn mystery_ship_mut(&mut self) -> &mut MysteryShip {
        &mut self.mystery_ship
    }

    #[cfg(test)]
    pub fn power_ups_mut(&mut self) -> &mut PowerUpManager {
        &mut self.power_ups
    }

    fn update_playing<I: InputSource + ?Sized>(&mut self, dt: f32, input: &I) {
        self.player.update(dt, input);

        if input.is_down(Control::Shoot) && self.player.can_shoot() {
            let fired = self.player.fire(&mut self.bullets);
            tracing::trace!(fired, "player fired");
            self.events.push(GameEvent::audio(AudioCue::Shoot));
        }

        self.bullets.update(dt);
        self.formation
            .update(dt, &mut self.bullets, self.player.pos.x, &mut self.rng);
        self.power_ups.update(dt);
        self.mystery_ship.update(dt, &mut self.rng);

        let result = systems::collision::run(
            CollisionTargets {
                player: &mut self.player,
                bullets: &mut self.bullets,
                formation: &mut self.formation,
                mystery_ship: &mut self.mystery_ship,
                power_ups: &mut self.power_ups,
            },
            &mut self.rng,
            &mut self.events,
        );
        self.add_score(result.points);

        if result.player_damaged {
            self.dying_timer = DYING_DURATION;
            self.transition(RoundState::Dying);
            tracing::debug!(lives = self.player.lives, "player hit");
        }

        if self.state == RoundState::Playing && self.formation.alive_count() == 0 {
            self.transition(RoundState::NextWave);
            self.persist_high_score();
        }
    }

    fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.persist_high_score();
        }
    }

    fn persist_high_score(&mut self) {
        self.events.push(GameEvent::PersistHighScore {
            score: self.high_score,
        });
    }

    fn start_next_wave(&mut self) {
        self.wave += 1;
        self.formation.init(self.wave);
        self.bullets.reset();
        self.power_ups.reset();
        self.mystery_ship.reset(&mut self.rng);
        self.player.clear_all_power_ups();
        self.events.push(GameEvent::WaveStarted { wave: self.wave });
    }

    fn transition(&mut self, to: RoundState) {
        let from = self.state;
        self.state = to;
        self.state_timer = 0.0;
        self.events.push(GameEvent::StateChanged { from, to });
        tracing::info!(?from, ?to, wave = self.wave, score = self.score, "round state changed");
    }
}
