//! Boss bullet patterns
//!
//! A pattern turns the boss position and the clock into a volley of enemy
//! bullets. Which pattern fires is looked up in a time-keyed schedule.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::EnemyBullet;
use super::trajectory::LateralOffset;
use crate::unit_from_angle;

/// Pattern families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    RadialBurst,
    Scatter,
}

/// A bullet pattern and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// `count` bullets evenly spaced on a full circle. Successive bursts
    /// alternate between the two curved lateral offsets.
    RadialBurst { count: u32, speed: f32, interval: u64 },
    /// `count` bullets at seeded random angles and speeds, flying straight
    Scatter {
        count: u32,
        min_speed: f32,
        max_speed: f32,
        interval: u64,
    },
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::RadialBurst { .. } => PatternKind::RadialBurst,
            Pattern::Scatter { .. } => PatternKind::Scatter,
        }
    }

    /// Cooldown before the boss may fire again (ms)
    pub fn interval(&self) -> u64 {
        match *self {
            Pattern::RadialBurst { interval, .. } | Pattern::Scatter { interval, .. } => interval,
        }
    }
}

/// A pattern that takes over from clock time `from` (ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPattern {
    pub from: u64,
    pub pattern: Pattern,
}

/// Bullets produced by one pattern firing
#[derive(Debug, Clone, PartialEq)]
pub struct Volley {
    pub kind: PatternKind,
    pub interval: u64,
    /// Offset used by every bullet of the volley
    pub offset: LateralOffset,
    pub bullets: Vec<EnemyBullet>,
}

/// Pattern selection plus the state patterns carry between volleys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternGenerator {
    /// Sorted by `from`
    pub schedule: Vec<ScheduledPattern>,
    /// Radial burst alternation: false = `Sqrt` next, true = `NegSqrtDouble` next
    pub flip: bool,
    /// Volleys fired so far; also the RNG stream of the next volley
    pub volleys: u64,
    pub seed: u64,
    pub bullet_radius: f32,
}

impl PatternGenerator {
    pub fn new(schedule: Vec<ScheduledPattern>, seed: u64, bullet_radius: f32) -> Self {
        Self {
            schedule,
            flip: false,
            volleys: 0,
            seed,
            bullet_radius,
        }
    }

    /// Pattern active at `now`: the latest entry that has started, or the
    /// first entry before any has
    pub fn select(&self, now: u64) -> Option<&Pattern> {
        self.schedule
            .iter()
            .rev()
            .find(|s| s.from <= now)
            .or_else(|| self.schedule.first())
            .map(|s| &s.pattern)
    }

    /// Fire the pattern active at `now` from `origin`
    pub fn generate(&mut self, origin: Vec2, now: u64) -> Option<Volley> {
        let pattern = *self.select(now)?;
        let volley = match pattern {
            Pattern::RadialBurst { count, speed, .. } => {
                let offset = if self.flip {
                    LateralOffset::NegSqrtDouble
                } else {
                    LateralOffset::Sqrt
                };
                self.flip = !self.flip;

                let bullets = (0..count)
                    .map(|i| {
                        let theta = TAU * i as f32 / count as f32;
                        EnemyBullet::new(
                            origin,
                            unit_from_angle(theta),
                            speed,
                            offset,
                            now,
                            self.bullet_radius,
                        )
                    })
                    .collect();
                Volley {
                    kind: PatternKind::RadialBurst,
                    interval: pattern.interval(),
                    offset,
                    bullets,
                }
            }
            Pattern::Scatter {
                count,
                min_speed,
                max_speed,
                ..
            } => {
                let mut rng = Pcg32::new(self.seed, self.volleys);
                let bullets = (0..count)
                    .map(|_| {
                        let theta = rng.random::<f32>() * TAU;
                        let speed = min_speed + (max_speed - min_speed) * rng.random::<f32>();
                        EnemyBullet::new(
                            origin,
                            unit_from_angle(theta),
                            speed,
                            LateralOffset::Straight,
                            now,
                            self.bullet_radius,
                        )
                    })
                    .collect();
                Volley {
                    kind: PatternKind::Scatter,
                    interval: pattern.interval(),
                    offset: LateralOffset::Straight,
                    bullets,
                }
            }
        };
        self.volleys += 1;
        log::debug!(
            "Volley {} at t={}ms: {:?} x{}",
            self.volleys,
            now,
            volley.kind,
            volley.bullets.len()
        );
        Some(volley)
    }
}
