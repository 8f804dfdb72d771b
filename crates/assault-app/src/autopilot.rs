//! Scripted player used by the headless driver.
//!
//! Each frame the autopilot reads the latest snapshot and decides which
//! keys are down. It steers under the nearest living alien with fire
//! held, and taps fire to get past the ready and game-over screens.

use assault_core::enums::RoundState;
use assault_core::input::{Control, InputSource, InputState, Key};
use assault_core::state::GameSnapshot;

/// Horizontal slack before the autopilot bothers to steer.
const STEER_DEADZONE: f32 = 6.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    keys: InputState,
    quit_on_game_over: bool,
}

impl Autopilot {
    pub fn new(quit_on_game_over: bool) -> Self {
        Self {
            keys: InputState::new(),
            quit_on_game_over,
        }
    }

    /// Choose this frame's keys.
    pub fn plan(&mut self, snapshot: &GameSnapshot) {
        match snapshot.state {
            RoundState::GameOver if self.quit_on_game_over => {
                self.keys.release_all();
                self.keys.press(Key::Escape);
            }
            RoundState::Ready | RoundState::GameOver => {
                self.hold(Key::ArrowLeft, false);
                self.hold(Key::ArrowRight, false);
                let down = self.keys.is_key_down(Key::Space);
                self.hold(Key::Space, !down);
            }
            RoundState::Playing => {
                self.keys.press(Key::Space);
                self.steer(snapshot);
            }
            RoundState::Dying | RoundState::NextWave => self.keys.release_all(),
        }
    }

    fn steer(&mut self, snapshot: &GameSnapshot) {
        let player_x = snapshot.player.position.x;
        let target = snapshot
            .aliens
            .iter()
            .map(|a| a.position.x - player_x)
            .min_by(|a, b| a.abs().total_cmp(&b.abs()));
        let dx = target.unwrap_or(0.0);
        self.hold(Key::ArrowLeft, dx < -STEER_DEADZONE);
        self.hold(Key::ArrowRight, dx > STEER_DEADZONE);
    }

    fn hold(&mut self, key: Key, down: bool) {
        match (down, self.keys.is_key_down(key)) {
            (true, false) => self.keys.press(key),
            (false, true) => self.keys.release(key),
            _ => {}
        }
    }
}

impl InputSource for Autopilot {
    fn is_down(&self, control: Control) -> bool {
        self.keys.is_down(control)
    }

    fn just_pressed(&self, control: Control) -> bool {
        self.keys.just_pressed(control)
    }

    fn end_frame(&mut self) {
        self.keys.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assault_core::state::AlienView;
    use glam::Vec2;

    fn alien_at(x: f32) -> AlienView {
        AlienView {
            position: Vec2::new(x, 100.0),
            size: Vec2::new(34.0, 28.0),
            alien_type: 0,
            hp: 1,
            max_hp: 1,
            hit_flash: 0.0,
            anim_phase: 0.0,
            dive: None,
        }
    }

    fn playing_snapshot(player_x: f32, alien_xs: &[f32]) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            state: RoundState::Playing,
            aliens: alien_xs.iter().map(|&x| alien_at(x)).collect(),
            ..GameSnapshot::default()
        };
        snapshot.player.position = Vec2::new(player_x, 550.0);
        snapshot
    }

    #[test]
    fn test_steers_toward_nearest_alien() {
        let mut pilot = Autopilot::new(true);
        pilot.plan(&playing_snapshot(400.0, &[100.0, 350.0, 600.0]));
        assert!(pilot.is_down(Control::Left));
        assert!(!pilot.is_down(Control::Right));
        assert!(pilot.is_down(Control::Shoot));

        pilot.plan(&playing_snapshot(400.0, &[430.0]));
        assert!(pilot.is_down(Control::Right));
        assert!(!pilot.is_down(Control::Left));
    }

    #[test]
    fn test_holds_still_inside_deadzone() {
        let mut pilot = Autopilot::new(true);
        pilot.plan(&playing_snapshot(400.0, &[403.0]));
        assert!(!pilot.is_down(Control::Left));
        assert!(!pilot.is_down(Control::Right));
    }

    #[test]
    fn test_taps_fire_on_ready() {
        let mut pilot = Autopilot::new(true);
        let ready = GameSnapshot::default();
        pilot.plan(&ready);
        assert!(pilot.just_pressed(Control::Shoot));
        pilot.end_frame();
        pilot.plan(&ready);
        assert!(!pilot.is_down(Control::Shoot));
        pilot.end_frame();
        pilot.plan(&ready);
        assert!(pilot.just_pressed(Control::Shoot), "re-pressed after release");
    }

    #[test]
    fn test_game_over_exits_or_restarts() {
        let over = GameSnapshot {
            state: RoundState::GameOver,
            ..GameSnapshot::default()
        };
        let mut pilot = Autopilot::new(true);
        pilot.plan(&over);
        assert!(pilot.just_pressed(Control::Exit));

        let mut pilot = Autopilot::new(false);
        pilot.plan(&over);
        assert!(!pilot.just_pressed(Control::Exit));
        assert!(pilot.just_pressed(Control::Shoot));
    }
}
