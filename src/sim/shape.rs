//! Collision shapes
//!
//! Circles and axis-aligned rectangles. Shapes are plain values computed from
//! an entity's current position whenever a collision test needs them.
//!
//! All tests use a strict convention: shapes that only touch do not intersect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rejected shape construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("rectangle corners are inverted: min={min}, max={max}")]
    InvertedRect { min: Vec2, max: Vec2 },

    #[error("shape coordinates must be finite")]
    NonFinite,
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Radius (>= 0)
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "circle radius must be non-negative");
        Self { center, radius }
    }

    /// Circle-circle: center distance strictly less than the radius sum
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) < reach * reach
    }

    /// Circle-rect: squared distance to the closest point of the rect
    /// strictly less than radius squared
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let closest = self.center.clamp(rect.min, rect.max);
        self.center.distance_squared(closest) < self.radius * self.radius
    }
}

/// An axis-aligned rectangle
///
/// `min` is the top-left corner and `max` the bottom-right corner;
/// `min <= max` holds on both axes for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build a rectangle from its corners, rejecting inverted or non-finite input
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ShapeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if min.x > max.x || min.y > max.y {
            return Err(ShapeError::InvertedRect { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build a rectangle around a center point (half extents taken as absolute)
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Rect-rect: open intervals overlap on both axes
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Rect-circle: same test as circle-rect with the arguments swapped
    #[inline]
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        circle.intersects_rect(self)
    }
}

/// Closed set of collision shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
}

impl Shape {
    /// Symmetric intersection test over every shape pairing
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.intersects_circle(b),
            (Shape::Circle(c), Shape::Rect(r)) => c.intersects_rect(r),
            (Shape::Rect(r), Shape::Circle(c)) => r.intersects_circle(c),
            (Shape::Rect(a), Shape::Rect(b)) => a.intersects_rect(b),
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.center,
            Shape::Rect(r) => r.center(),
        }
    }

    /// Shift the shape by `offset`
    pub fn translate(&self, offset: Vec2) -> Shape {
        match *self {
            Shape::Circle(c) => Shape::Circle(Circle::new(c.center + offset, c.radius)),
            Shape::Rect(r) => Shape::Rect(Rect {
                min: r.min + offset,
                max: r.max + offset,
            }),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}
