//! Tests for the round controller, the collision pass as wired into a tick,
//! and whole-game determinism.

use glam::Vec2;

use assault_core::constants::*;
use assault_core::enums::{AudioCue, DivePhase, PowerUpKind, RoundState};
use assault_core::events::GameEvent;
use assault_core::input::{InputSource, InputState, Key};

use crate::engine::{RoundController, SimConfig, TickStatus};
use crate::formation::{AlienMotion, Dive};
use crate::power_ups::PowerUpItem;

fn controller() -> RoundController {
    RoundController::new(SimConfig::default())
}

/// Leave `ready` with a tap of the fire key.
fn start_playing(game: &mut RoundController, input: &mut InputState) {
    input.press(Key::Space);
    game.update(FIXED_DT, input);
    input.release(Key::Space);
    assert_eq!(game.state(), RoundState::Playing);
}

fn tap(input: &mut InputState, key: Key) {
    input.release(key);
    input.end_frame();
    input.press(key);
}

fn hit_player_with_bullet(game: &mut RoundController, input: &mut InputState) {
    let target = game.player().pos;
    game.bullets_mut().spawn_alien(target, Vec2::ZERO);
    game.update(FIXED_DT, input);
}

fn has_event(events: &[GameEvent], event: &GameEvent) -> bool {
    events.iter().any(|e| e == event)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut game_a = RoundController::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut game_b = RoundController::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut input_a = InputState::new();
    let mut input_b = InputState::new();
    input_a.press(Key::Space);
    input_b.press(Key::Space);

    for tick in 0..900 {
        // Sweep left and right so the player meets bullets and power-ups.
        let key = if (tick / 90) % 2 == 0 { Key::ArrowLeft } else { Key::ArrowRight };
        for input in [&mut input_a, &mut input_b] {
            input.release(Key::ArrowLeft);
            input.release(Key::ArrowRight);
            input.press(key);
        }
        game_a.update(FIXED_DT, &mut input_a);
        game_b.update(FIXED_DT, &mut input_b);

        let json_a = serde_json::to_string(&game_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&game_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {tick}");
        assert_eq!(game_a.drain_events(), game_b.drain_events());
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut game_a = RoundController::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut game_b = RoundController::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    let mut input = InputState::new();

    let mut diverged = false;
    for _ in 0..1200 {
        game_a.update(FIXED_DT, &mut input);
        game_b.update(FIXED_DT, &mut input);
        let json_a = serde_json::to_string(&game_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&game_b.snapshot()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Construction and snapshot ----

#[test]
fn test_new_game_snapshot() {
    let mut game = RoundController::new(SimConfig {
        seed: 7,
        high_score: 1234,
    });
    let snap = game.snapshot();
    assert_eq!(snap.state, RoundState::Ready);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.high_score, 1234);
    assert_eq!(snap.player.lives, STARTING_LIVES);
    assert_eq!(snap.aliens.len(), FORMATION_COLS * FORMATION_ROWS);
    assert!(snap.player_bullets.is_empty());
    assert!(snap.alien_bullets.is_empty());
    assert!(snap.mystery_ship.is_none());
    assert_eq!(game.drain_events(), vec![GameEvent::WaveStarted { wave: 1 }]);
    assert!(game.drain_events().is_empty(), "drain empties the queue");
}

#[test]
fn test_snapshot_skips_dead_aliens() {
    let mut game = controller();
    game.formation_mut().aliens[0].kill();
    game.formation_mut().aliens[9].kill();
    assert_eq!(game.snapshot().aliens.len(), FORMATION_COLS * FORMATION_ROWS - 2);
}

#[test]
fn test_ready_does_not_advance_world() {
    let mut game = controller();
    let mut input = InputState::new();
    let before = serde_json::to_string(&game.snapshot().aliens).unwrap();
    game.update(1.0, &mut input);
    assert_eq!(game.state(), RoundState::Ready);
    assert_eq!(serde_json::to_string(&game.snapshot().aliens).unwrap(), before);
}

// ---- Ready ----

#[test]
fn test_ready_times_out_after_three_seconds() {
    let mut game = controller();
    let mut input = InputState::new();
    game.update(1.5, &mut input);
    game.update(1.5, &mut input);
    assert_eq!(game.state(), RoundState::Ready, "exactly 3s is not past the timeout");
    game.update(0.1, &mut input);
    assert_eq!(game.state(), RoundState::Playing);
}

#[test]
fn test_ready_to_playing_on_fire_press() {
    let mut game = controller();
    let mut input = InputState::new();
    game.drain_events();
    start_playing(&mut game, &mut input);
    assert!(has_event(
        &game.drain_events(),
        &GameEvent::StateChanged {
            from: RoundState::Ready,
            to: RoundState::Playing,
        }
    ));
}

#[test]
fn test_ready_ignores_held_fire() {
    let mut game = controller();
    let mut input = InputState::new();
    input.press(Key::Space);
    input.end_frame();
    game.update(FIXED_DT, &mut input);
    assert_eq!(game.state(), RoundState::Ready);
}

// ---- Playing ----

#[test]
fn test_holding_fire_shoots() {
    let mut game = controller();
    let mut input = InputState::new();
    input.press(Key::Space);
    game.update(FIXED_DT, &mut input);
    game.drain_events();

    game.update(FIXED_DT, &mut input);
    assert_eq!(game.bullets().player_bullets.active_count(), 1);
    assert!(has_event(&game.drain_events(), &GameEvent::audio(AudioCue::Shoot)));

    game.update(FIXED_DT, &mut input);
    assert_eq!(
        game.bullets().player_bullets.active_count(),
        1,
        "cooldown holds the next shot"
    );
}

#[test]
fn test_spread_fires_three() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.player_mut().apply_power_up(PowerUpKind::Spread);
    input.press(Key::ArrowUp);
    game.update(FIXED_DT, &mut input);
    assert_eq!(game.bullets().player_bullets.active_count(), 3);
}

#[test]
fn test_bullet_kills_alien_and_scores() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);

    let index = FORMATION_COLS * 4 + 2;
    let target = game.formation().aliens[index].pos;
    game.bullets_mut().spawn_player_bullet(target);
    game.update(FIXED_DT, &mut input);

    assert!(!game.formation().aliens[index].alive);
    assert_eq!(game.score(), ALIEN_POINTS[4]);
    assert_eq!(game.high_score(), ALIEN_POINTS[4]);
    assert_eq!(game.bullets().player_bullets.active_count(), 0);
    assert!(has_event(&game.drain_events(), &GameEvent::audio(AudioCue::Explosion)));
}

#[test]
fn test_high_score_only_raised_when_beaten() {
    let mut game = RoundController::new(SimConfig {
        high_score: 1000,
        ..Default::default()
    });
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    let target = game.formation().aliens[0].pos;
    game.bullets_mut().spawn_player_bullet(target);
    game.update(FIXED_DT, &mut input);
    assert_eq!(game.score(), ALIEN_POINTS[0]);
    assert_eq!(game.high_score(), 1000);
    let persisted = game
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::PersistHighScore { .. }));
    assert!(!persisted);
}

#[test]
fn test_beating_high_score_persists_it() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.drain_events();
    let target = game.formation().aliens[0].pos;
    game.bullets_mut().spawn_player_bullet(target);
    game.update(FIXED_DT, &mut input);
    assert_eq!(game.high_score(), ALIEN_POINTS[0]);
    assert!(has_event(
        &game.drain_events(),
        &GameEvent::PersistHighScore {
            score: ALIEN_POINTS[0]
        }
    ));
}

#[test]
fn test_mystery_ship_hit_scores_bonus() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    {
        let ship = game.mystery_ship_mut();
        ship.active = true;
        ship.x = 300.0;
        ship.speed = 0.0;
        ship.points = 300;
    }
    game.bullets_mut()
        .spawn_player_bullet(Vec2::new(300.0, MYSTERY_SHIP_Y + 8.0));
    game.update(FIXED_DT, &mut input);

    assert_eq!(game.score(), 300);
    assert!(!game.mystery_ship().active);
    assert!(game.snapshot().mystery_ship.is_none());
}

#[test]
fn test_power_up_pickup() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    let player_pos = game.player().pos;
    if let Some((_, item)) = game.power_ups_mut().pool.acquire() {
        *item = PowerUpItem {
            pos: player_pos,
            kind: PowerUpKind::Rapid,
            ..PowerUpItem::default()
        };
    }
    game.drain_events();
    game.update(FIXED_DT, &mut input);

    assert_eq!(game.player().power_up, Some(PowerUpKind::Rapid));
    assert_eq!(game.power_ups().active_count(), 0);
    assert!(has_event(&game.drain_events(), &GameEvent::audio(AudioCue::PowerUp)));
}

// ---- Dying ----

#[test]
fn test_alien_bullet_sends_player_dying() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.drain_events();

    hit_player_with_bullet(&mut game, &mut input);

    assert_eq!(game.state(), RoundState::Dying);
    assert_eq!(game.dying_timer(), DYING_DURATION);
    assert_eq!(game.player().lives, STARTING_LIVES - 1);
    let events = game.drain_events();
    assert!(has_event(&events, &GameEvent::audio(AudioCue::Hit)));
    assert!(has_event(
        &events,
        &GameEvent::StateChanged {
            from: RoundState::Playing,
            to: RoundState::Dying,
        }
    ));
}

#[test]
fn test_shield_absorbs_without_dying() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.player_mut().apply_power_up(PowerUpKind::Shield);

    hit_player_with_bullet(&mut game, &mut input);

    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.player().lives, STARTING_LIVES);
    assert_eq!(game.player().shield_hits, SHIELD_HITS - 1);
}

#[test]
fn test_diving_alien_collision() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    let player_pos = game.player().pos;
    {
        let alien = &mut game.formation_mut().aliens[12];
        alien.pos = player_pos;
        alien.motion = AlienMotion::Diving(Dive {
            phase: DivePhase::Descending,
            pos: player_pos,
            angle: 0.0,
            speed: 0.0,
        });
    }
    game.update(FIXED_DT, &mut input);

    assert!(!game.formation().aliens[12].alive);
    assert_eq!(game.score(), 0);
    assert_eq!(game.state(), RoundState::Dying);
}

#[test]
fn test_dying_returns_to_playing_with_lives_left() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    hit_player_with_bullet(&mut game, &mut input);

    game.update(0.5, &mut input);
    game.update(0.5, &mut input);
    assert_eq!(game.state(), RoundState::Dying);
    game.update(0.5, &mut input);
    assert_eq!(game.state(), RoundState::Playing);
    assert!(game.player().is_invulnerable());
}

#[test]
fn test_last_life_ends_game() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.player_mut().lives = 1;
    hit_player_with_bullet(&mut game, &mut input);
    assert_eq!(game.player().lives, 0);
    game.drain_events();

    game.update(1.0, &mut input);
    assert_eq!(game.state(), RoundState::Dying);
    game.update(0.5, &mut input);
    assert_eq!(game.state(), RoundState::GameOver);

    let events = game.drain_events();
    assert!(has_event(&events, &GameEvent::audio(AudioCue::GameOver)));
    assert!(has_event(&events, &GameEvent::PersistHighScore { score: 0 }));
}

// ---- Game over ----

#[test]
fn test_game_over_restart_needs_delay_and_press() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.player_mut().lives = 1;
    hit_player_with_bullet(&mut game, &mut input);
    game.update(DYING_DURATION, &mut input);
    assert_eq!(game.state(), RoundState::GameOver);

    tap(&mut input, Key::Space);
    game.update(0.5, &mut input);
    assert_eq!(game.state(), RoundState::GameOver, "press too early");

    game.update(0.6, &mut input);
    assert_eq!(game.state(), RoundState::GameOver, "delay passed but no press");

    tap(&mut input, Key::Space);
    game.update(FIXED_DT, &mut input);
    assert_eq!(game.state(), RoundState::Ready);
    assert_eq!(game.state_timer(), 0.0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.wave(), 1);
    assert_eq!(game.player().lives, STARTING_LIVES);
    assert_eq!(game.formation().alive_count(), FORMATION_COLS * FORMATION_ROWS);
}

#[test]
fn test_reset_keeps_high_score() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    let target = game.formation().aliens[0].pos;
    game.bullets_mut().spawn_player_bullet(target);
    game.update(FIXED_DT, &mut input);
    game.reset_game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), ALIEN_POINTS[0]);
}

// ---- Next wave ----

#[test]
fn test_clearing_wave_advances() {
    let mut game = controller();
    let mut input = InputState::new();
    start_playing(&mut game, &mut input);
    game.player_mut().apply_power_up(PowerUpKind::Shield);
    for alien in game.formation_mut().aliens.iter_mut() {
        alien.kill();
    }
    game.drain_events();

    game.update(FIXED_DT, &mut input);
    assert_eq!(game.state(), RoundState::NextWave);
    assert_eq!(game.state_timer(), 0.0);
    assert!(has_event(&game.drain_events(), &GameEvent::PersistHighScore { score: 0 }));

    game.bullets_mut().spawn_alien(Vec2::new(100.0, 100.0), Vec2::ZERO);
    game.update(1.0, &mut input);
    game.update(1.0, &mut input);
    assert_eq!(game.state(), RoundState::NextWave, "exactly 2s is not past the delay");

    game.update(0.1, &mut input);
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.wave(), 2);
    assert_eq!(game.formation().wave, 2);
    assert_eq!(game.formation().alive_count(), FORMATION_COLS * FORMATION_ROWS);
    assert_eq!(game.bullets().alien_bullets.active_count(), 0);
    assert_eq!(game.player().power_up, None);
    assert_eq!(game.player().shield_hits, 0);
    assert!(has_event(&game.drain_events(), &GameEvent::WaveStarted { wave: 2 }));
}

// ---- Exit ----

#[test]
fn test_exit_short_circuits_tick() {
    let mut game = controller();
    let mut input = InputState::new();
    input.press(Key::Escape);
    input.press(Key::Space);

    assert_eq!(game.update(5.0, &mut input), TickStatus::Exit);
    assert_eq!(game.state(), RoundState::Ready, "no further processing");
    assert_eq!(game.state_timer(), 0.0);
    assert!(!input.key_just_pressed(Key::Escape), "edges cleared");

    assert_eq!(game.update(FIXED_DT, &mut input), TickStatus::Continue);
}

#[test]
fn test_exit_works_in_every_state() {
    for state in [
        RoundState::Ready,
        RoundState::Playing,
        RoundState::Dying,
        RoundState::NextWave,
        RoundState::GameOver,
    ] {
        let mut game = controller();
        game.force_state(state);
        let mut input = InputState::new();
        input.press(Key::Escape);
        assert_eq!(game.update(FIXED_DT, &mut input), TickStatus::Exit);
        assert_eq!(game.state(), state);
    }
}

// ---- Long run ----

#[test]
fn test_long_idle_run_reaches_game_over() {
    // An idle player is eventually worn down by aimed shots and dives.
    let mut game = controller();
    let mut input = InputState::new();
    let mut reached = false;
    for _ in 0..60 * 600 {
        game.update(FIXED_DT, &mut input);
        if game.state() == RoundState::GameOver {
            reached = true;
            break;
        }
    }
    assert!(reached);
    assert_eq!(game.player().lives, 0);
}
