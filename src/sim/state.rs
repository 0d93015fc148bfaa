//! Game world and core simulation types
//!
//! The world owns every entity and counter. It is plain data: cloning it,
//! comparing it, or serializing it captures the whole simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Boss, EnemyBullet, Player, PlayerBullet};
use super::pattern::{PatternGenerator, PatternKind};
use super::trajectory::LateralOffset;
use crate::settings::Settings;

/// Outcome of the fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fight in progress
    Playing,
    /// Boss health reached zero
    Won,
    /// Player health reached zero
    Lost,
}

/// Which collection a bullet belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Things that happened during the last frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// The player fired a shot
    PlayerFired { at: Vec2 },
    /// The boss fired a pattern
    VolleyFired {
        kind: PatternKind,
        offset: LateralOffset,
        count: usize,
    },
    /// Bullets left the arena
    Despawned { owner: BulletOwner, count: usize },
    PlayerHit { hits: u32, health: i32 },
    BossHit { hits: u32, health: i32 },
    PhaseChanged { phase: GamePhase },
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameWorld {
    pub settings: Settings,
    pub health: i32,
    pub boss_health: i32,
    /// Offset applied to every draw origin
    pub camera_offset: Vec2,
    /// Current shake strength, decays every frame
    pub screen_shake: f32,
    pub player: Player,
    pub boss: Boss,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub patterns: PatternGenerator,
    pub phase: GamePhase,
    /// Last clock sample seen (ms)
    pub clock: u64,
    /// Frames advanced so far
    pub frame: u64,
    /// Events of the most recent frame
    pub events: Vec<WorldEvent>,
}

impl GameWorld {
    /// Create a world with the player and boss at their start positions
    pub fn new(settings: Settings) -> Self {
        let player = Player::new(&settings.player);
        let boss = Boss::new(&settings.boss);
        let patterns = PatternGenerator::new(
            settings.patterns.clone(),
            settings.seed,
            settings.boss.bullet_radius,
        );
        Self {
            health: settings.health,
            boss_health: settings.boss_health,
            camera_offset: Vec2::ZERO,
            screen_shake: 0.0,
            player,
            boss,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            patterns,
            phase: GamePhase::Playing,
            clock: 0,
            frame: 0,
            events: Vec::new(),
            settings,
        }
    }

    /// Total live bullets
    pub fn bullet_count(&self) -> usize {
        self.player_bullets.len() + self.enemy_bullets.len()
    }

    /// Phase implied by the current health counters
    pub fn evaluate_phase(&self) -> GamePhase {
        if self.health <= 0 {
            GamePhase::Lost
        } else if self.boss_health <= 0 {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// JSON snapshot of the whole world
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_from_settings() {
        let settings = Settings::default();
        let world = GameWorld::new(settings.clone());
        assert_eq!(world.health, settings.health);
        assert_eq!(world.boss_health, settings.boss_health);
        assert_eq!(world.player.position, settings.player.start);
        assert_eq!(world.boss.position, settings.boss.start);
        assert_eq!(world.bullet_count(), 0);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_phase_from_health() {
        let mut world = GameWorld::default();
        assert_eq!(world.evaluate_phase(), GamePhase::Playing);
        world.boss_health = 0;
        assert_eq!(world.evaluate_phase(), GamePhase::Won);
        // Losing takes priority when both drop in the same frame
        world.health = 0;
        assert_eq!(world.evaluate_phase(), GamePhase::Lost);
    }

    #[test]
    fn test_snapshot_round_trips() {
        let world = GameWorld::default();
        let json = world.snapshot().expect("serializable");
        let restored: GameWorld = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(restored, world);
    }
}
