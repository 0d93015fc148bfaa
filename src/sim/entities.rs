//! Simulated entities and their per-frame update rules
//!
//! Entities never remove themselves or touch the world's collections.
//! `update` reports whether the entity should be dropped and anything it
//! spawns goes into the frame's staging buffers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::pattern::{PatternGenerator, Volley};
use super::shape::{Circle, Rect, Shape};
use super::trajectory::{BossMove, Deviation, Easing, LateralOffset, bullet_position};
use crate::outside_bound;
use crate::settings::{Arena, BossSettings, PlayerSettings};

/// Entities spawned during a frame, merged into the world after all updates
#[derive(Debug, Default)]
pub struct Spawned {
    pub player_bullets: Vec<PlayerBullet>,
    pub volleys: Vec<Volley>,
}

/// Everything an entity may read or write while updating
pub struct StepContext<'a> {
    /// Clock sample for this frame (ms)
    pub now: u64,
    pub arena: Arena,
    pub spawned: &'a mut Spawned,
    pub patterns: &'a mut PatternGenerator,
}

/// Capability to advance one simulation step
pub trait Updatable {
    /// Advance to `ctx.now`. Returns true when the entity should be removed.
    fn update(&mut self, ctx: &mut StepContext<'_>) -> bool;
}

#[inline]
fn elapsed(now: u64, since: u64) -> f32 {
    now.saturating_sub(since) as f32
}

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub half_size: f32,
    /// A shot is pending
    pub is_bullet: bool,
    /// Earliest clock time the next shot may fire (ms)
    pub cool_time: u64,
    pub fire_cooldown: u64,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
}

impl Player {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            position: settings.start,
            half_size: settings.half_size,
            is_bullet: false,
            cool_time: 0,
            fire_cooldown: settings.fire_cooldown_ms,
            bullet_speed: settings.bullet_speed,
            bullet_radius: settings.bullet_radius,
        }
    }

    /// Move by `delta`, staying inside `[-clamp, clamp]` on both axes
    pub fn move_by(&mut self, delta: Vec2, clamp: f32) {
        self.position = (self.position + delta).clamp(Vec2::splat(-clamp), Vec2::splat(clamp));
    }

    /// Queue a shot; it fires on the first update past the cooldown
    pub fn request_fire(&mut self) {
        self.is_bullet = true;
    }
}

impl Updatable for Player {
    fn update(&mut self, ctx: &mut StepContext<'_>) -> bool {
        if self.is_bullet && ctx.now >= self.cool_time {
            ctx.spawned.player_bullets.push(PlayerBullet::new(
                self.position,
                self.bullet_speed,
                ctx.now,
                self.bullet_radius,
            ));
            self.is_bullet = false;
            self.cool_time = ctx.now.saturating_add(self.fire_cooldown);
        }
        false
    }
}

impl Collidable for Player {
    fn shape(&self) -> Shape {
        Rect::from_center(self.position, Vec2::splat(self.half_size)).into()
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub position: Vec2,
    pub initial_position: Vec2,
    pub initial_time: u64,
    /// Units per millisecond
    pub speed: f32,
    pub radius: f32,
}

impl PlayerBullet {
    pub fn new(at: Vec2, speed: f32, now: u64, radius: f32) -> Self {
        Self {
            position: at,
            initial_position: at,
            initial_time: now,
            speed,
            radius,
        }
    }

    pub fn position_at(&self, now: u64) -> Vec2 {
        self.initial_position + Vec2::new(0.0, self.speed * elapsed(now, self.initial_time))
    }
}

impl Updatable for PlayerBullet {
    fn update(&mut self, ctx: &mut StepContext<'_>) -> bool {
        self.position = self.position_at(ctx.now);
        outside_bound(self.position, ctx.arena.despawn)
    }
}

impl Collidable for PlayerBullet {
    fn shape(&self) -> Shape {
        Circle::new(self.position, self.radius).into()
    }
}

/// A boss shot on a curved path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub position: Vec2,
    pub initial_position: Vec2,
    pub initial_time: u64,
    pub speed: f32,
    /// Unit firing direction scaled by `speed`
    pub direction: Vec2,
    pub offset: LateralOffset,
    pub radius: f32,
}

impl EnemyBullet {
    pub fn new(
        at: Vec2,
        heading: Vec2,
        speed: f32,
        offset: LateralOffset,
        now: u64,
        radius: f32,
    ) -> Self {
        Self {
            position: at,
            initial_position: at,
            initial_time: now,
            speed,
            direction: heading.normalize_or_zero() * speed,
            offset,
            radius,
        }
    }

    pub fn position_at(&self, now: u64) -> Vec2 {
        bullet_position(
            self.initial_position,
            self.direction,
            self.offset,
            self.speed,
            elapsed(now, self.initial_time),
        )
    }
}

impl Updatable for EnemyBullet {
    fn update(&mut self, ctx: &mut StepContext<'_>) -> bool {
        self.position = self.position_at(ctx.now);
        outside_bound(self.position, ctx.arena.despawn)
    }
}

impl Collidable for EnemyBullet {
    fn shape(&self) -> Shape {
        Circle::new(self.position, self.radius).into()
    }
}

/// The boss: scripted movement plus pattern fire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub position: Vec2,
    pub radius: f32,
    pub movement: BossMove,
    /// Earliest clock time the next pattern may fire (ms)
    pub cool_time: u64,
    /// Waypoints visited in order, looping
    pub route: Vec<Vec2>,
    pub next_waypoint: usize,
    pub legs: u64,
    pub leg_time: u64,
    pub leg_deviation: Deviation,
    pub easing: Easing,
}

impl Boss {
    pub fn new(settings: &BossSettings) -> Self {
        Self {
            position: settings.start,
            radius: settings.radius,
            movement: BossMove::idle(settings.start),
            cool_time: 0,
            route: settings.route.clone(),
            next_waypoint: 0,
            legs: 0,
            leg_time: settings.leg_time_ms,
            leg_deviation: Deviation::Arc {
                amplitude: settings.leg_deviation,
            },
            easing: settings.easing,
        }
    }

    /// Start the next route leg at `now` from the current position
    fn begin_leg(&mut self, now: u64) {
        let Some(&destination) = self.route.get(self.next_waypoint) else {
            return;
        };
        let deviation = if self.legs % 2 == 0 {
            self.leg_deviation
        } else {
            self.leg_deviation.mirrored()
        };
        self.movement = BossMove {
            origin: self.position,
            destination,
            start_time: now,
            travel_time: self.leg_time,
            deviation,
            easing: self.easing,
        };
        self.next_waypoint = (self.next_waypoint + 1) % self.route.len();
        self.legs += 1;
    }
}

impl Updatable for Boss {
    fn update(&mut self, ctx: &mut StepContext<'_>) -> bool {
        let now = ctx.now;

        self.position = self.movement.position_at(now);
        if self.movement.finished(now) {
            self.begin_leg(now);
        }

        if now >= self.cool_time {
            if let Some(volley) = ctx.patterns.generate(self.position, now) {
                self.cool_time = now.saturating_add(volley.interval);
                ctx.spawned.volleys.push(volley);
            }
        }
        false
    }
}

impl Collidable for Boss {
    fn shape(&self) -> Shape {
        Circle::new(self.position, self.radius).into()
    }
}
