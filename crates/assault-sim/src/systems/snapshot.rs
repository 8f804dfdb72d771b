//! Snapshot system: reads every manager and builds a complete GameSnapshot.
//!
//! This system is read-only. It never modifies simulation state.

use assault_core::enums::RoundState;
use assault_core::state::*;

use crate::bullets::Bullet;
use crate::formation::AlienFormation;
use crate::mystery_ship::MysteryShip;
use crate::player::Player;
use crate::pool::ObjectPool;
use crate::power_ups::PowerUpManager;

/// Round-level values that live on the controller itself.
#[derive(Debug, Clone, Copy)]
pub struct RoundInfo {
    pub state: RoundState,
    pub state_timer: f32,
    pub wave: u32,
    pub score: u32,
    pub high_score: u32,
}

/// Build a complete GameSnapshot from the current simulation state.
pub fn build_snapshot(
    round: RoundInfo,
    player: &Player,
    formation: &AlienFormation,
    player_bullets: &ObjectPool<Bullet>,
    alien_bullets: &ObjectPool<Bullet>,
    power_ups: &PowerUpManager,
    mystery_ship: &MysteryShip,
) -> GameSnapshot {
    GameSnapshot {
        state: round.state,
        state_timer: round.state_timer,
        wave: round.wave,
        score: round.score,
        high_score: round.high_score,
        player: build_player(player),
        aliens: build_aliens(formation),
        player_bullets: build_bullets(player_bullets),
        alien_bullets: build_bullets(alien_bullets),
        power_ups: build_power_ups(power_ups),
        mystery_ship: mystery_ship.active.then(|| MysteryShipView {
            position: mystery_ship.position(),
            size: mystery_ship.size,
            direction: mystery_ship.direction,
        }),
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.pos,
        size: player.size,
        lives: player.lives,
        invulnerable: player.is_invulnerable(),
        power_up: player.power_up,
        power_up_timer: player.power_up_timer.max(0.0),
        shield_hits: player.shield_hits,
    }
}

/// Living aliens only, in grid order.
fn build_aliens(formation: &AlienFormation) -> Vec<AlienView> {
    formation
        .aliens
        .iter()
        .filter(|a| a.alive)
        .map(|a| AlienView {
            position: a.pos,
            size: a.size,
            alien_type: a.alien_type,
            hp: a.hp,
            max_hp: a.max_hp,
            hit_flash: a.hit_flash.max(0.0),
            anim_phase: a.anim_phase,
            dive: a.dive_phase(),
        })
        .collect()
}

fn build_bullets(pool: &ObjectPool<Bullet>) -> Vec<BulletView> {
    pool.iter_active()
        .map(|(_, b)| BulletView {
            position: b.pos,
            size: b.size,
            color: b.color,
        })
        .collect()
}

fn build_power_ups(power_ups: &PowerUpManager) -> Vec<PowerUpView> {
    power_ups
        .pool
        .iter_active()
        .map(|(_, item)| PowerUpView {
            position: item.pos,
            kind: item.kind,
            bob_phase: item.bob_phase,
        })
        .collect()
}
