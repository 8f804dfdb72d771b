//! Simulation constants and tuning parameters.

use glam::Vec2;

/// Fixed simulation step rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per fixed step.
pub const FIXED_DT: f32 = 1.0 / TICK_RATE as f32;

/// Longest frame time fed into the fixed-step accumulator (seconds).
pub const MAX_FRAME_TIME: f32 = 0.25;

// --- Playfield ---

/// Playfield width in pixels.
pub const CANVAS_W: f32 = 800.0;

/// Playfield height in pixels. +y points down.
pub const CANVAS_H: f32 = 600.0;

// --- Formation ---

/// Columns in the alien grid.
pub const FORMATION_COLS: usize = 8;

/// Rows in the alien grid. Row 0 is the top (commanders).
pub const FORMATION_ROWS: usize = 5;

pub const ALIEN_WIDTH: f32 = 34.0;
pub const ALIEN_HEIGHT: f32 = 28.0;

/// Horizontal distance between neighbouring alien centers.
pub const ALIEN_SPACING_X: f32 = 50.0;

/// Vertical distance between neighbouring alien centers.
pub const ALIEN_SPACING_Y: f32 = 42.0;

/// Y of the top formation row's center.
pub const FORMATION_TOP: f32 = 60.0;

/// Kill points indexed by alien type (row).
pub const ALIEN_POINTS: [u32; FORMATION_ROWS] = [50, 40, 30, 20, 10];

/// Points awarded for an alien type outside the table.
pub const FALLBACK_ALIEN_POINTS: u32 = 10;

/// Alien type of the top row.
pub const COMMANDER_TYPE: u8 = 0;

/// Alien type of the second row.
pub const WARRIOR_TYPE: u8 = 1;

/// From this wave on commanders carry 2 hp.
pub const COMMANDER_ARMOR_WAVE: u32 = 3;

/// From this wave on warriors carry 2 hp.
pub const WARRIOR_ARMOR_WAVE: u32 = 6;

/// Seconds an alien flashes after taking a hit.
pub const HIT_FLASH_DURATION: f32 = 0.1;

/// Animation phase advance rate (radians per second).
pub const ALIEN_ANIM_RATE: f32 = 3.0;

// --- Sway ---

/// Formation sway speed on wave 1; grows by PER_WAVE each wave.
pub const BASE_SWAY_SPEED: f32 = 40.0;
pub const SWAY_SPEED_PER_WAVE: f32 = 8.0;

/// Distance from the playfield edge at which the sway reverses.
pub const SWAY_MARGIN: f32 = 20.0;

// --- Alien shooting ---

pub const BASE_SHOOT_INTERVAL: f32 = 1.5;
pub const SHOOT_INTERVAL_PER_WAVE: f32 = 0.15;
pub const MIN_SHOOT_INTERVAL: f32 = 0.4;

/// Y coordinate alien shots aim at (roughly the player's row).
pub const ALIEN_AIM_Y: f32 = 500.0;

// --- Diving ---

pub const BASE_DIVE_INTERVAL: f32 = 3.0;
pub const DIVE_INTERVAL_PER_WAVE: f32 = 0.3;
pub const MIN_DIVE_INTERVAL: f32 = 1.0;

/// Dive timer value right after a formation is built.
pub const INITIAL_DIVE_DELAY: f32 = 1.5;

pub const GROUP_DIVE_CHANCE_PER_WAVE: f32 = 0.2;
pub const MAX_GROUP_DIVE_CHANCE: f32 = 0.7;

/// Upper bound on divers launched by one group dive.
pub const MAX_GROUP_DIVE_SIZE: usize = 3;

/// Angle offset added per diver within a group (radians).
pub const GROUP_DIVE_ANGLE_STEP: f32 = 0.5;

/// Dive angle per pixel of horizontal offset toward the player.
pub const DIVE_PLAYER_BIAS: f32 = 0.01;

pub const DIVE_SPEED_MIN: f32 = 180.0;
pub const DIVE_SPEED_MAX: f32 = 280.0;

/// Horizontal weave amplitude of a descending diver (pixels per second).
pub const DIVE_WEAVE_AMPLITUDE: f32 = 120.0;

/// Weave angle advance rate (radians per second).
pub const DIVE_WEAVE_RATE: f32 = 3.0;

/// A descending diver below this Y wraps around to the top.
pub const DIVE_EXIT_Y: f32 = 620.0;

/// Y a diver re-enters at when it starts returning.
pub const DIVE_REENTRY_Y: f32 = -30.0;

/// Speed at which a returning diver steers toward its home slot.
pub const DIVE_RETURN_SPEED: f32 = 200.0;

/// A returning diver closer than this to home snaps into formation.
pub const DIVE_SNAP_DISTANCE: f32 = 5.0;

// --- Player ---

pub const PLAYER_SPEED: f32 = 300.0;
pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 24.0;

/// Distance from the bottom edge to the player's center.
pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

pub const STARTING_LIVES: u32 = 3;

/// Base cooldown between player shots (seconds).
pub const DEFAULT_SHOOT_RATE: f32 = 0.3;

/// Cooldown multiplier while rapid fire is active.
pub const RAPID_FIRE_MULTIPLIER: f32 = 0.4;

/// Hits a fresh shield absorbs.
pub const SHIELD_HITS: u32 = 3;

/// Lifetime of an expiring power-up effect (seconds).
pub const POWERUP_DURATION: f32 = 5.0;

/// Invulnerability after taking damage (seconds).
pub const INVULN_DURATION: f32 = 2.0;

/// Length of the dying pause after the player is hit (seconds).
pub const DYING_DURATION: f32 = 1.5;

// --- Bullets ---

/// Capacity of the player bullet pool.
pub const PLAYER_BULLET_CAPACITY: usize = 50;

/// Capacity of the alien bullet pool.
pub const ALIEN_BULLET_CAPACITY: usize = 100;

/// Vertical speed of a default player shot (negative is up).
pub const PLAYER_BULLET_SPEED: f32 = -500.0;

/// Speed of an aimed alien shot.
pub const ALIEN_BULLET_SPEED: f32 = 200.0;

pub const PLAYER_BULLET_SIZE: Vec2 = Vec2::new(3.0, 10.0);
pub const ALIEN_BULLET_SIZE: Vec2 = Vec2::new(4.0, 8.0);

pub const PLAYER_BULLET_COLOR: u32 = 0x00ffcc;
pub const ALIEN_BULLET_COLOR: u32 = 0xff4444;

/// Bullets this far outside the playfield are released.
pub const BULLET_OFF_SCREEN_MARGIN: f32 = 20.0;

/// Scale applied to alien bullet size when testing against the player.
pub const ALIEN_BULLET_HITBOX_SCALE: f32 = 2.0;

/// Velocities of the three-way spread shot.
pub const SPREAD_SHOT_VELOCITIES: [Vec2; 3] = [
    Vec2::new(-80.0, -480.0),
    Vec2::new(0.0, PLAYER_BULLET_SPEED),
    Vec2::new(80.0, -480.0),
];

/// Velocity of the single straight shot.
pub const SINGLE_SHOT_VELOCITIES: [Vec2; 1] = [Vec2::new(0.0, PLAYER_BULLET_SPEED)];

// --- Mystery ship ---

pub const MYSTERY_SHIP_Y: f32 = 32.0;
pub const MYSTERY_SHIP_WIDTH: f32 = 40.0;
pub const MYSTERY_SHIP_HEIGHT: f32 = 18.0;

/// Spawn delay range (seconds).
pub const MYSTERY_SHIP_SPAWN_MIN: f32 = 18.0;
pub const MYSTERY_SHIP_SPAWN_MAX: f32 = 30.0;

/// Horizontal speed range (pixels per second).
pub const MYSTERY_SHIP_SPEED_MIN: f32 = 120.0;
pub const MYSTERY_SHIP_SPEED_MAX: f32 = 180.0;

/// Possible bonus values, chosen uniformly on each hit.
pub const MYSTERY_SHIP_POINTS: [u32; 3] = [200, 300, 500];

// --- Power-ups ---

/// Capacity of the falling power-up pool.
pub const POWERUP_CAPACITY: usize = 10;

/// Chance that a killed alien drops a power-up.
pub const POWERUP_SPAWN_CHANCE: f32 = 0.25;

pub const POWERUP_FALL_SPEED: f32 = 80.0;

/// Half-extent of a falling power-up.
pub const POWERUP_SIZE: f32 = 14.0;

/// Bob phase advance rate (radians per second).
pub const POWERUP_BOB_RATE: f32 = 4.0;

/// Falling power-ups below CANVAS_H + this are released.
pub const POWERUP_DESPAWN_MARGIN: f32 = 20.0;

// --- Round flow ---

/// Seconds in `ready` before play starts on its own.
pub const READY_DURATION: f32 = 3.0;

/// Seconds between a cleared wave and the next one.
pub const NEXT_WAVE_DURATION: f32 = 2.0;

/// Seconds `gameover` ignores the shoot key.
pub const GAME_OVER_INPUT_DELAY: f32 = 1.0;
