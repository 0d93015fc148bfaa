//! Time-parameterized motion for bullets and the boss
//!
//! Every function here is pure: the same inputs always give the same
//! position, which keeps the simulation reproducible.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::perpendicular;

/// Perpendicular displacement added to a bullet's straight path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateralOffset {
    /// No drift, straight radial travel
    Straight,
    /// `sqrt(t * speed)`
    Sqrt,
    /// `-sqrt(2 * t * speed)`
    NegSqrtDouble,
}

impl LateralOffset {
    /// Offset after `t` milliseconds for a bullet of the given speed
    #[inline]
    pub fn eval(self, t: f32, speed: f32) -> f32 {
        match self {
            LateralOffset::Straight => 0.0,
            LateralOffset::Sqrt => (t * speed).max(0.0).sqrt(),
            LateralOffset::NegSqrtDouble => -(2.0 * t * speed).max(0.0).sqrt(),
        }
    }
}

/// Position of a curved bullet `t` milliseconds after it was fired
///
/// `direction` is the unit firing direction scaled by `speed`. The lateral
/// offset is applied along the direction rotated by +90 degrees.
pub fn bullet_position(
    initial: Vec2,
    direction: Vec2,
    offset: LateralOffset,
    speed: f32,
    t: f32,
) -> Vec2 {
    let normal = perpendicular(direction).normalize_or_zero();
    initial + direction * t + normal * offset.eval(t, speed)
}

/// Remaps raw progress to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic smoothstep: slow start and stop
    SmoothStep,
    /// Half-cosine ease in/out
    Sine,
    /// Always zero; only meaningful for idle moves
    Hold,
}

impl Easing {
    pub fn apply(self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        match self {
            Easing::Linear => u,
            Easing::SmoothStep => u * u * (3.0 - 2.0 * u),
            Easing::Sine => 0.5 - 0.5 * (PI * u).cos(),
            Easing::Hold => 0.0,
        }
    }
}

/// Lateral deviation of a boss move as a function of eased progress
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Deviation {
    #[default]
    None,
    /// `amplitude * sin(pi * p)`, zero at both ends of the move
    Arc { amplitude: f32 },
}

impl Deviation {
    pub fn eval(self, p: f32) -> f32 {
        match self {
            Deviation::None => 0.0,
            Deviation::Arc { amplitude } => amplitude * (PI * p).sin(),
        }
    }

    /// Same curve bent to the other side
    pub fn mirrored(self) -> Self {
        match self {
            Deviation::None => Deviation::None,
            Deviation::Arc { amplitude } => Deviation::Arc {
                amplitude: -amplitude,
            },
        }
    }
}

/// A single boss move from `origin` to `destination`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossMove {
    pub origin: Vec2,
    pub destination: Vec2,
    /// Clock time the move starts (ms)
    pub start_time: u64,
    /// Duration of the move (ms)
    pub travel_time: u64,
    pub deviation: Deviation,
    pub easing: Easing,
}

impl BossMove {
    /// Stay put at `at`
    pub fn idle(at: Vec2) -> Self {
        Self {
            origin: at,
            destination: at,
            start_time: 0,
            travel_time: 0,
            deviation: Deviation::None,
            easing: Easing::Hold,
        }
    }

    #[inline]
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.travel_time)
    }

    /// True once the move has reached its destination
    #[inline]
    pub fn finished(&self, now: u64) -> bool {
        now >= self.end_time()
    }

    /// Boss position at clock time `now`
    ///
    /// The deviation is applied along the unnormalized perpendicular of the
    /// travel vector, so it scales with the length of the move.
    pub fn position_at(&self, now: u64) -> Vec2 {
        if now <= self.start_time {
            return self.origin;
        }
        if now >= self.end_time() {
            return self.destination;
        }
        let u = (now - self.start_time) as f32 / self.travel_time as f32;
        let p = self.easing.apply(u);
        let travel = self.destination - self.origin;
        self.origin + travel * p + perpendicular(travel) * self.deviation.eval(p)
    }
}
