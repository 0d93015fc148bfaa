//! Per-frame simulation step
//!
//! `advance` is the single entry point the frame driver calls. Its steps run
//! in a fixed order:
//! 1. apply player intents
//! 2. update and sweep enemy bullets
//! 3. update and sweep player bullets
//! 4. update the player (may fire)
//! 5. update the boss (may fire a pattern)
//! 6. resolve hits
//!
//! Bullets spawned in steps 4 and 5 are staged and merged after their
//! collection has been swept, so they are first moved on the next frame.

use glam::Vec2;

use super::collision::resolve_hits;
use super::entities::{Spawned, StepContext, Updatable};
use super::state::{BulletOwner, GamePhase, GameWorld, WorldEvent};
use crate::consts::SHAKE_DECAY;

/// Decoded input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub exit: bool,
}

impl Intents {
    /// Unit direction of travel; diagonals move no faster than a single axis
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.down, self.up)).normalize_or_zero()
    }
}

/// What the frame driver should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Tear down now
    Exit,
}

/// Advance the world to clock time `now` (ms)
pub fn advance(world: &mut GameWorld, intents: &Intents, now: u64) -> Control {
    if intents.exit {
        log::info!("Exit requested at t={}ms", now);
        return Control::Exit;
    }

    world.events.clear();
    if world.phase != GamePhase::Playing {
        return Control::Continue;
    }

    let now = if now < world.clock {
        log::warn!("Clock went backwards ({} < {}), holding", now, world.clock);
        world.clock
    } else {
        now
    };
    world.clock = now;
    world.frame += 1;

    // 1. Player intents
    let step = world.settings.player.step;
    world
        .player
        .move_by(intents.direction() * step, world.settings.arena.clamp);
    if intents.fire {
        world.player.request_fire();
    }

    let mut spawned = Spawned::default();
    let mut ctx = StepContext {
        now,
        arena: world.settings.arena,
        spawned: &mut spawned,
        patterns: &mut world.patterns,
    };

    // 2-3. Update every bullet, then drop the ones that left the arena
    let before = world.enemy_bullets.len();
    world.enemy_bullets.retain_mut(|b| !b.update(&mut ctx));
    let enemy_despawned = before - world.enemy_bullets.len();

    let before = world.player_bullets.len();
    world.player_bullets.retain_mut(|b| !b.update(&mut ctx));
    let player_despawned = before - world.player_bullets.len();

    // 4-5. Player and boss never leave the world
    world.player.update(&mut ctx);
    world.boss.update(&mut ctx);

    if enemy_despawned > 0 {
        world.events.push(WorldEvent::Despawned {
            owner: BulletOwner::Enemy,
            count: enemy_despawned,
        });
    }
    if player_despawned > 0 {
        world.events.push(WorldEvent::Despawned {
            owner: BulletOwner::Player,
            count: player_despawned,
        });
    }

    for bullet in spawned.player_bullets {
        world.events.push(WorldEvent::PlayerFired { at: bullet.position });
        world.player_bullets.push(bullet);
    }
    for volley in spawned.volleys {
        world.events.push(WorldEvent::VolleyFired {
            kind: volley.kind,
            offset: volley.offset,
            count: volley.bullets.len(),
        });
        world.enemy_bullets.extend(volley.bullets);
    }

    // 6. Hits
    resolve_hits(world);

    update_camera(world, now);

    let phase = world.evaluate_phase();
    if phase != world.phase {
        log::info!(
            "Phase {:?} -> {:?} at t={}ms (health {}, boss {})",
            world.phase,
            phase,
            now,
            world.health,
            world.boss_health
        );
        world.phase = phase;
        world.events.push(WorldEvent::PhaseChanged { phase });
    }

    Control::Continue
}

/// Decay the screen shake and derive the camera offset from it
fn update_camera(world: &mut GameWorld, now: u64) {
    world.screen_shake *= SHAKE_DECAY;
    if world.screen_shake < 0.001 {
        world.screen_shake = 0.0;
    }
    let t = now as f32;
    world.camera_offset = Vec2::new((t * 0.05).sin(), (t * 0.07).cos()) * world.screen_shake;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::entities::{EnemyBullet, PlayerBullet};
    use crate::sim::pattern::{Pattern, ScheduledPattern};
    use crate::sim::trajectory::LateralOffset;

    /// A world whose boss stays still and fires rarely
    fn quiet_world() -> GameWorld {
        let mut settings = Settings::default();
        settings.boss.route.clear();
        settings.patterns = vec![ScheduledPattern {
            from: 0,
            pattern: Pattern::RadialBurst {
                count: 4,
                speed: 0.0005,
                interval: 1_000_000,
            },
        }];
        GameWorld::new(settings)
    }

    fn fire() -> Intents {
        Intents {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_intent_direction() {
        let intents = Intents {
            up: true,
            left: true,
            ..Default::default()
        };
        let diagonal = intents.direction();
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert!(diagonal.x < 0.0 && diagonal.y > 0.0);
        assert!((diagonal.x + diagonal.y).abs() < 1e-6);

        let right = Intents {
            right: true,
            ..Default::default()
        };
        assert_eq!(right.direction(), Vec2::X);
        let both = Intents {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(both.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_exit_returns_immediately() {
        let mut world = quiet_world();
        let before = world.clone();
        let exit = Intents {
            exit: true,
            fire: true,
            ..Default::default()
        };
        assert_eq!(advance(&mut world, &exit, 16), Control::Exit);
        assert_eq!(world, before);
    }

    #[test]
    fn test_movement_applied_before_firing() {
        let mut world = quiet_world();
        let start = world.player.position;
        let intents = Intents {
            right: true,
            fire: true,
            ..Default::default()
        };
        advance(&mut world, &intents, 0);

        let moved = start + Vec2::new(world.settings.player.step, 0.0);
        assert_eq!(world.player.position, moved);
        // Spawned from the moved position and not yet advanced
        assert_eq!(world.player_bullets.len(), 1);
        assert_eq!(world.player_bullets[0].position, moved);
        assert!(world.events.contains(&WorldEvent::PlayerFired { at: moved }));
    }

    #[test]
    fn test_player_clamped_to_arena() {
        let mut world = quiet_world();
        let up_right = Intents {
            up: true,
            right: true,
            ..Default::default()
        };
        for frame in 0..200 {
            advance(&mut world, &up_right, frame * 16);
        }
        assert_eq!(world.player.position, Vec2::splat(world.settings.arena.clamp));
    }

    #[test]
    fn test_cooldown_gating() {
        let mut world = quiet_world();
        advance(&mut world, &fire(), 1_000);
        advance(&mut world, &fire(), 1_100);
        advance(&mut world, &fire(), 1_199);
        assert_eq!(world.player_bullets.len(), 1);

        advance(&mut world, &fire(), 1_200);
        assert_eq!(world.player_bullets.len(), 2);
    }

    #[test]
    fn test_spawned_bullets_move_from_next_frame() {
        let mut world = quiet_world();
        advance(&mut world, &Intents::default(), 0);
        assert_eq!(world.enemy_bullets.len(), 4);
        let boss_pos = world.boss.position;
        assert!(world.enemy_bullets.iter().all(|b| b.position == boss_pos));

        advance(&mut world, &Intents::default(), 100);
        assert!(world.enemy_bullets.iter().all(|b| b.position != boss_pos));
    }

    #[test]
    fn test_despawn_happens_once() {
        let mut world = quiet_world();
        world.boss.cool_time = u64::MAX;
        world.player_bullets.push(PlayerBullet::new(Vec2::new(0.9, 0.95), 0.002, 0, 0.01));

        let mut despawns = 0;
        for frame in 0..10 {
            advance(&mut world, &Intents::default(), frame * 16);
            despawns += world
                .events
                .iter()
                .filter(|e| matches!(e, WorldEvent::Despawned { owner: BulletOwner::Player, .. }))
                .count();
        }
        assert_eq!(despawns, 1);
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn test_enemy_hit_costs_health() {
        let mut world = quiet_world();
        world.boss.cool_time = u64::MAX;
        let target = world.player.position;
        world.enemy_bullets.push(EnemyBullet::new(
            target + Vec2::new(0.0, 0.1),
            Vec2::NEG_Y,
            0.001,
            LateralOffset::Straight,
            0,
            0.015,
        ));
        let health = world.health;

        advance(&mut world, &Intents::default(), 100);
        assert_eq!(world.health, health - 1);
        assert!(world.enemy_bullets.is_empty());
        assert!(world.screen_shake > 0.0);
        assert_ne!(world.camera_offset, Vec2::ZERO);
    }

    #[test]
    fn test_boss_defeat_ends_fight() {
        let mut world = quiet_world();
        world.boss_health = 1;
        world.boss.cool_time = u64::MAX;
        let boss_pos = world.boss.position;
        world.player_bullets.push(PlayerBullet::new(boss_pos - Vec2::new(0.0, 0.2), 0.002, 0, 0.01));

        advance(&mut world, &Intents::default(), 100);
        assert_eq!(world.phase, GamePhase::Won);
        assert!(world.events.contains(&WorldEvent::PhaseChanged { phase: GamePhase::Won }));

        // Further frames are frozen
        let frozen = world.frame;
        advance(&mut world, &fire(), 5_000);
        assert_eq!(world.frame, frozen);
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_clock_regression_is_held() {
        let mut world = quiet_world();
        advance(&mut world, &Intents::default(), 500);
        advance(&mut world, &Intents::default(), 300);
        assert_eq!(world.clock, 500);
    }
}
