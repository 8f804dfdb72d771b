//! Collision pass: resolves every contact for one `playing` tick.
//!
//! Categories run in a fixed order: player bullets against the mystery
//! ship, player bullets against aliens, alien bullets against the player,
//! diving aliens against the player, then power-up pickups. Pools are
//! walked by slot index so releasing mid-pass is safe.

use glam::Vec2;
use rand::Rng;

use assault_core::enums::{AudioCue, PowerUpKind};
use assault_core::events::GameEvent;

use crate::bullets::BulletManager;
use crate::formation::{points_for_type, AlienFormation};
use crate::mystery_ship::MysteryShip;
use crate::player::{DamageOutcome, Player};
use crate::power_ups::PowerUpManager;

/// Mutable handles to everything that can collide.
pub struct CollisionTargets<'a> {
    pub player: &'a mut Player,
    pub bullets: &'a mut BulletManager,
    pub formation: &'a mut AlienFormation,
    pub mystery_ship: &'a mut MysteryShip,
    pub power_ups: &'a mut PowerUpManager,
}

/// What the pass changed, for the round controller to act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    pub points: u32,
    pub aliens_killed: u32,
    /// The player lost a life this tick.
    pub player_damaged: bool,
    pub power_ups_collected: Vec<PowerUpKind>,
}

pub fn run<R: Rng + ?Sized>(
    targets: CollisionTargets<'_>,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> CollisionResult {
    let CollisionTargets {
        player,
        bullets,
        formation,
        mystery_ship,
        power_ups,
    } = targets;
    let mut result = CollisionResult::default();

    // 1. Player bullets × mystery ship
    if mystery_ship.active {
        let ship_bounds = mystery_ship.bounds();
        let hit = (0..bullets.player_bullets.capacity()).find(|&index| {
            bullets
                .player_bullets
                .get(index)
                .is_some_and(|b| b.bounds().overlaps(&ship_bounds))
        });
        if let Some(index) = hit {
            bullets.player_bullets.release(index);
            let position = mystery_ship.position();
            let points = mystery_ship.hit(rng);
            result.points += points;
            tracing::debug!(points, "mystery ship destroyed");
            events.push(GameEvent::particles(position, 25, 0xffcc00, 180.0, 0.6, 4.0));
            events.push(GameEvent::audio(AudioCue::Explosion));
            events.push(GameEvent::shake(5.0, 0.2));
        }
    }

    // 2. Player bullets × aliens (one alien per bullet)
    for index in 0..bullets.player_bullets.capacity() {
        let Some(bullet) = bullets.player_bullets.get(index) else {
            continue;
        };
        let bounds = bullet.bounds();
        let Some(alien) = formation
            .aliens
            .iter_mut()
            .find(|a| a.alive && a.bounds().overlaps(&bounds))
        else {
            continue;
        };
        bullets.player_bullets.release(index);
        let position = alien.pos;
        if alien.hit() {
            result.points += points_for_type(alien.alien_type);
            result.aliens_killed += 1;
            alien_explosion(events, position);
            power_ups.spawn(position, rng);
        } else {
            events.push(GameEvent::particles(position, 6, 0xffffff, 80.0, 0.2, 2.0));
        }
    }

    // 3. Alien bullets × player (enlarged hit-box)
    let player_bounds = player.bounds();
    for index in 0..bullets.alien_bullets.capacity() {
        let overlapping = bullets
            .alien_bullets
            .get(index)
            .is_some_and(|b| b.hitbox().overlaps(&player_bounds));
        if overlapping {
            bullets.alien_bullets.release(index);
            handle_player_hit(player, events, &mut result);
        }
    }

    // 4. Diving aliens × player
    for alien in formation.aliens.iter_mut() {
        if alien.alive && alien.is_diving() && alien.bounds().overlaps(&player_bounds) {
            alien.kill();
            events.push(GameEvent::particles(alien.pos, 20, 0xff4444, 200.0, 0.5, 5.0));
            handle_player_hit(player, events, &mut result);
        }
    }

    // 5. Power-ups × player
    for index in 0..power_ups.pool.capacity() {
        let Some(item) = power_ups.pool.get(index) else {
            continue;
        };
        if !item.bounds().overlaps(&player_bounds) {
            continue;
        }
        let (kind, position) = (item.kind, item.pos);
        power_ups.pool.release(index);
        player.apply_power_up(kind);
        result.power_ups_collected.push(kind);
        events.push(GameEvent::audio(AudioCue::PowerUp));
        events.push(GameEvent::particles(position, 10, 0xffffff, 60.0, 0.3, 2.0));
    }

    result
}

fn alien_explosion(events: &mut Vec<GameEvent>, position: Vec2) {
    events.push(GameEvent::particles(position, 15, 0xff8844, 150.0, 0.4, 4.0));
    events.push(GameEvent::particles(position, 8, 0xffcc00, 80.0, 0.3, 2.0));
    events.push(GameEvent::audio(AudioCue::Explosion));
    events.push(GameEvent::shake(3.0, 0.15));
}

fn handle_player_hit(player: &mut Player, events: &mut Vec<GameEvent>, result: &mut CollisionResult) {
    events.push(GameEvent::audio(AudioCue::Hit));
    match player.take_damage() {
        DamageOutcome::Damaged => {
            events.push(GameEvent::shake(8.0, 0.3));
            events.push(GameEvent::particles(player.pos, 20, 0x00ccff, 150.0, 0.5, 4.0));
            result.player_damaged = true;
        }
        DamageOutcome::Shielded | DamageOutcome::Invulnerable => {
            events.push(GameEvent::shake(3.0, 0.1));
        }
    }
}
