//! Fruit Slicer - A falling-object slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, slicing, scoring)
//! - `game`: Fixed-rate loop wiring the simulation to its collaborators
//! - `renderer`: Presentation sinks for per-tick draw data
//! - `audio`: Slice sound cues
//! - `platform`: Clock, frame pacing and input sources

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, RoundEnd};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Every object is drawn and hit-tested as a square of this size
    pub const OBJECT_SIZE: f32 = 100.0;
    /// Horizontal margin kept free on both sides when spawning
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Spawn intervals per kind (ms)
    pub const FRUIT_INTERVAL_MS: u64 = 1200;
    pub const ICE_INTERVAL_MS: u64 = 8000;
    pub const BOMB_INTERVAL_MS: u64 = 15000;

    /// Fall speed range, sampled once per object: [min, max)
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 2.0;

    /// Number of fruit visual variants (kiwi, apple, orange)
    pub const FRUIT_VARIANTS: u8 = 3;

    /// Time freeze triggered by slicing ice (ms)
    pub const FREEZE_DURATION_MS: u64 = 3000;
    /// Slash marker lifetime (ms)
    pub const SLASH_LIFETIME_MS: u64 = 300;
    /// Sliced halves are removed after this long even if still on screen (ms)
    pub const SLICE_LIFETIME_MS: u64 = 1000;

    /// Missed objects allowed before the round is lost
    pub const MAX_STRIKES: u32 = 3;

    /// Slice animation: halves start apart and drift outward
    pub const SLICE_START_OFFSET: f32 = 40.0;
    pub const SLICE_DRIFT_PER_TICK: f32 = 3.0;
    pub const SLICE_FALL_PER_TICK: f32 = 1.0;
}

/// Half-open point-in-box test (`min <= p < min + size` on both axes)
#[inline]
pub fn box_contains(min: Vec2, size: Vec2, point: Vec2) -> bool {
    point.x >= min.x && point.x < min.x + size.x && point.y >= min.y && point.y < min.y + size.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_contains_is_half_open() {
        let min = Vec2::new(10.0, 20.0);
        let size = Vec2::splat(100.0);
        assert!(box_contains(min, size, Vec2::new(10.0, 20.0)));
        assert!(box_contains(min, size, Vec2::new(109.9, 119.9)));
        assert!(!box_contains(min, size, Vec2::new(110.0, 50.0)));
        assert!(!box_contains(min, size, Vec2::new(50.0, 120.0)));
        assert!(!box_contains(min, size, Vec2::new(9.9, 50.0)));
    }
}
