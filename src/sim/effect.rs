//! Slash markers left where an object was sliced

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::timer::IntervalTimer;
use crate::consts::SLASH_LIFETIME_MS;

/// Short-lived cosmetic marker. Never collides, never scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashEffect {
    pub id: u32,
    /// Center of the marker
    pub pos: Vec2,
    /// Rotation in degrees, chosen at creation
    pub rotation_deg: f32,
    lifetime: IntervalTimer,
}

impl SlashEffect {
    pub fn new(id: u32, pos: Vec2, rotation_deg: f32, now: u64) -> Self {
        Self {
            id,
            pos,
            rotation_deg,
            lifetime: IntervalTimer::new(SLASH_LIFETIME_MS, now),
        }
    }

    pub fn created_at(&self) -> u64 {
        self.lifetime.started_at()
    }

    /// More than 300ms old
    pub fn is_expired(&self, now: u64) -> bool {
        self.lifetime.is_past(now)
    }
}
