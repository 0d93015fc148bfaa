//! Game settings and tuning
//!
//! Loaded from a JSON file by the frame driver; every field falls back to the
//! defaults in `consts` when omitted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::pattern::{Pattern, ScheduledPattern};
use crate::sim::trajectory::Easing;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IoError, reason='{0}'")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON, reason='{0}'")]
    Parse(#[from] serde_json::Error),

    #[error("Pattern schedule is empty")]
    EmptySchedule,

    #[error("Pattern schedule must be sorted by start time")]
    UnsortedSchedule,

    #[error("Arena bound must be positive and finite, got {0}")]
    InvalidBound(f32),

    #[error("{name} must be non-negative and finite, got {value}")]
    InvalidRadius { name: &'static str, value: f32 },
}

/// Arena limits
///
/// `clamp` keeps the player inside the arena, `despawn` removes bullets that
/// leave it. Both default to the same half-extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub clamp: f32,
    pub despawn: f32,
}

impl Arena {
    /// Same limit for clamping and despawning
    pub const fn uniform(bound: f32) -> Self {
        Self {
            clamp: bound,
            despawn: bound,
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::uniform(ARENA_BOUND)
    }
}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub start: Vec2,
    pub half_size: f32,
    /// Distance moved per frame per held direction
    pub step: f32,
    pub fire_cooldown_ms: u64,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start: Vec2::from(PLAYER_START),
            half_size: PLAYER_HALF_SIZE,
            step: PLAYER_STEP,
            fire_cooldown_ms: PLAYER_FIRE_COOLDOWN_MS,
            bullet_speed: PLAYER_BULLET_SPEED,
            bullet_radius: PLAYER_BULLET_RADIUS,
        }
    }
}

/// Boss tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossSettings {
    pub start: Vec2,
    pub radius: f32,
    /// Waypoints visited in order, looping; empty keeps the boss still
    pub route: Vec<Vec2>,
    pub leg_time_ms: u64,
    /// Lateral bend of each leg, alternating sides
    pub leg_deviation: f32,
    pub easing: Easing,
    pub bullet_radius: f32,
}

impl Default for BossSettings {
    fn default() -> Self {
        Self {
            start: Vec2::from(BOSS_START),
            radius: BOSS_RADIUS,
            route: vec![
                Vec2::new(-0.5, 0.6),
                Vec2::new(0.5, 0.6),
                Vec2::new(0.0, 0.4),
            ],
            leg_time_ms: BOSS_LEG_TIME_MS,
            leg_deviation: BOSS_LEG_DEVIATION,
            easing: Easing::SmoothStep,
            bullet_radius: ENEMY_BULLET_RADIUS,
        }
    }
}

/// Complete game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: Arena,
    pub player: PlayerSettings,
    pub boss: BossSettings,
    pub health: i32,
    pub boss_health: i32,
    /// Boss patterns keyed by the clock time they take over
    pub patterns: Vec<ScheduledPattern>,
    /// Seed for randomized patterns
    pub seed: u64,
    /// Camera shake added per player hit
    pub hit_shake: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            player: PlayerSettings::default(),
            boss: BossSettings::default(),
            health: PLAYER_HEALTH,
            boss_health: BOSS_HEALTH,
            patterns: vec![ScheduledPattern {
                from: 0,
                pattern: Pattern::RadialBurst {
                    count: BURST_COUNT,
                    speed: BURST_SPEED,
                    interval: BURST_INTERVAL_MS,
                },
            }],
            seed: 0x5EED,
            hit_shake: HIT_SHAKE,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for bound in [self.arena.clamp, self.arena.despawn] {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(SettingsError::InvalidBound(bound));
            }
        }
        for (name, value) in [
            ("player.half_size", self.player.half_size),
            ("player.bullet_radius", self.player.bullet_radius),
            ("boss.radius", self.boss.radius),
            ("boss.bullet_radius", self.boss.bullet_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidRadius { name, value });
            }
        }
        if self.patterns.is_empty() {
            return Err(SettingsError::EmptySchedule);
        }
        if self.patterns.windows(2).any(|w| w[0].from > w[1].from) {
            return Err(SettingsError::UnsortedSchedule);
        }
        Ok(())
    }
}
