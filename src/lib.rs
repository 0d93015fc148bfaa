//! Boss Rush - a 2D bullet-hell boss fight
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, trajectories, collisions, patterns)
//! - `renderer`: Draw descriptors handed to an external vertex submitter
//! - `settings`: Data-driven tuning loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Arena, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame interval of the frame driver (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;

    /// Arena half-extent: player clamp and bullet despawn limit
    pub const ARENA_BOUND: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_START: [f32; 2] = [0.0, -0.7];
    pub const PLAYER_HALF_SIZE: f32 = 0.04;
    /// Distance moved per frame while a direction is held
    pub const PLAYER_STEP: f32 = 0.02;
    pub const PLAYER_FIRE_COOLDOWN_MS: u64 = 200;
    /// Player bullet speed (units per millisecond, straight up)
    pub const PLAYER_BULLET_SPEED: f32 = 0.002;
    pub const PLAYER_BULLET_RADIUS: f32 = 0.01;
    pub const PLAYER_HEALTH: i32 = 5;

    /// Boss defaults
    pub const BOSS_START: [f32; 2] = [0.0, 0.6];
    pub const BOSS_RADIUS: f32 = 0.12;
    pub const BOSS_HEALTH: i32 = 100;
    /// Duration of one route leg
    pub const BOSS_LEG_TIME_MS: u64 = 2_000;
    /// Lateral deviation of a route leg (fraction of the leg length)
    pub const BOSS_LEG_DEVIATION: f32 = 0.25;

    /// Radial burst defaults
    pub const BURST_COUNT: u32 = 30;
    /// Enemy bullet radial speed (units per millisecond)
    pub const BURST_SPEED: f32 = 0.0005;
    pub const BURST_INTERVAL_MS: u64 = 1_000;
    pub const ENEMY_BULLET_RADIUS: f32 = 0.015;

    /// Camera shake applied when the player is hit
    pub const HIT_SHAKE: f32 = 0.03;
    /// Per-frame shake decay factor
    pub const SHAKE_DECAY: f32 = 0.9;
}

/// Rotate a vector by +90 degrees: (x, y) -> (-y, x)
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// True if either coordinate lies strictly outside `[-bound, bound]`
#[inline]
pub fn outside_bound(p: Vec2, bound: f32) -> bool {
    p.x.abs() > bound || p.y.abs() > bound
}
