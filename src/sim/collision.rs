//! Entity-level collision detection and hit resolution
//!
//! Entities expose their current shape; all pairings go through the same
//! shape-level test, so no entity pair needs its own logic.

use super::shape::Shape;
use super::state::{GameWorld, WorldEvent};

/// Capability to expose a shape for intersection testing
pub trait Collidable {
    /// Shape at the entity's current position
    fn shape(&self) -> Shape;
}

/// Check whether two collidable entities overlap
#[inline]
pub fn detect_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    a.shape().intersects(&b.shape())
}

/// Hits counted by one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Enemy bullets that struck the player
    pub player_hits: u32,
    /// Player bullets that struck the boss
    pub boss_hits: u32,
}

/// Remove bullets touching an opposing entity and deduct health for each
///
/// Every enemy bullet overlapping the player costs one `health`; every
/// player bullet overlapping the boss costs one `boss_health`. Health never
/// drops below zero.
pub fn resolve_hits(world: &mut GameWorld) -> HitReport {
    let player = &world.player;
    let before = world.enemy_bullets.len();
    world.enemy_bullets.retain(|b| !detect_collision(b, player));
    let player_hits = u32::try_from(before - world.enemy_bullets.len()).unwrap_or(u32::MAX);

    let boss = &world.boss;
    let before = world.player_bullets.len();
    world.player_bullets.retain(|b| !detect_collision(b, boss));
    let boss_hits = u32::try_from(before - world.player_bullets.len()).unwrap_or(u32::MAX);

    if player_hits > 0 {
        world.health = world.health.saturating_sub_unsigned(player_hits).max(0);
        world.screen_shake += world.settings.hit_shake * player_hits as f32;
        world.events.push(WorldEvent::PlayerHit {
            hits: player_hits,
            health: world.health,
        });
        log::debug!("Player hit x{} (health {})", player_hits, world.health);
    }
    if boss_hits > 0 {
        world.boss_health = world.boss_health.saturating_sub_unsigned(boss_hits).max(0);
        world.events.push(WorldEvent::BossHit {
            hits: boss_hits,
            health: world.boss_health,
        });
        log::debug!("Boss hit x{} (health {})", boss_hits, world.boss_health);
    }

    HitReport {
        player_hits,
        boss_hits,
    }
}
