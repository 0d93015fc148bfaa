//! Draw descriptors for the external renderer
//!
//! Every drawable entity becomes one `DrawInstance`. The instance list is
//! plain old data and can be uploaded as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{Boss, Collidable, EnemyBullet, GameWorld, Player, PlayerBullet, Shape};

/// Primitive used to draw an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Primitive {
    Circle = 0,
    Rect = 1,
}

/// One entity ready to draw
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Draw origin, camera offset already applied
    pub center: [f32; 2],
    /// Full width and height
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// `Primitive` discriminant
    pub primitive: u32,
    pub _pad: u32,
}

impl DrawInstance {
    pub fn new(center: Vec2, size: Vec2, color: [f32; 4], primitive: Primitive) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            color,
            primitive: primitive as u32,
            _pad: 0,
        }
    }

    /// Instance covering `shape` exactly
    pub fn from_shape(shape: &Shape, color: [f32; 4]) -> Self {
        match shape {
            Shape::Circle(c) => Self::new(
                c.center,
                Vec2::splat(c.radius * 2.0),
                color,
                Primitive::Circle,
            ),
            Shape::Rect(r) => Self::new(r.center(), r.size(), color, Primitive::Rect),
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const PLAYER_BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BOSS: [f32; 4] = [0.8, 0.2, 0.3, 1.0];
    pub const ENEMY_BULLET: [f32; 4] = [1.0, 0.6, 0.2, 1.0];
}

/// Capability to render given a camera offset
pub trait Drawable {
    fn draw(&self, camera_offset: Vec2) -> DrawInstance;
}

/// Draws the entity's collision shape shifted by the camera offset
fn draw_shape<T: Collidable>(entity: &T, camera_offset: Vec2, color: [f32; 4]) -> DrawInstance {
    DrawInstance::from_shape(&entity.shape().translate(-camera_offset), color)
}

impl Drawable for Player {
    fn draw(&self, camera_offset: Vec2) -> DrawInstance {
        draw_shape(self, camera_offset, colors::PLAYER)
    }
}

impl Drawable for Boss {
    fn draw(&self, camera_offset: Vec2) -> DrawInstance {
        draw_shape(self, camera_offset, colors::BOSS)
    }
}

impl Drawable for PlayerBullet {
    fn draw(&self, camera_offset: Vec2) -> DrawInstance {
        draw_shape(self, camera_offset, colors::PLAYER_BULLET)
    }
}

impl Drawable for EnemyBullet {
    fn draw(&self, camera_offset: Vec2) -> DrawInstance {
        draw_shape(self, camera_offset, colors::ENEMY_BULLET)
    }
}

/// Instances for every live entity, back to front: boss, enemy bullets,
/// player bullets, player
pub fn draw_list(world: &GameWorld) -> Vec<DrawInstance> {
    let offset = world.camera_offset;
    let mut instances = Vec::with_capacity(world.bullet_count() + 2);
    instances.push(world.boss.draw(offset));
    instances.extend(world.enemy_bullets.iter().map(|b| b.draw(offset)));
    instances.extend(world.player_bullets.iter().map(|b| b.draw(offset)));
    instances.push(world.player.draw(offset));
    instances
}

/// Raw bytes of an instance list
pub fn as_bytes(instances: &[DrawInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
