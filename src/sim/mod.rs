//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only comes from the `now` passed to `advance`
//! - Seeded RNG only, derived per volley
//! - Stable iteration order (collections keep insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod pattern;
pub mod shape;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Collidable, HitReport, detect_collision, resolve_hits};
pub use entities::{Boss, EnemyBullet, Player, PlayerBullet, Spawned, StepContext, Updatable};
pub use pattern::{Pattern, PatternGenerator, PatternKind, ScheduledPattern, Volley};
pub use shape::{Circle, Rect, Shape, ShapeError};
pub use state::{BulletOwner, GamePhase, GameWorld, WorldEvent};
pub use tick::{Control, Intents, advance};
pub use trajectory::{BossMove, Deviation, Easing, LateralOffset, bullet_position};
