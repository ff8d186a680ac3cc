//! Game settings and preferences
//!
//! Read from an optional JSON file; anything missing takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::AudioManager;
use crate::consts::*;
use crate::platform::autopilot::AutopilotConfig;
use crate::sim::Arena;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Target ticks per second
    pub tick_rate: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Session ===
    /// Fixed RNG seed; random per launch when unset
    pub seed: Option<u64>,
    /// Rounds played by the headless demo
    pub rounds: u32,
    /// Simulate as fast as possible instead of in real time
    pub fast_forward: bool,
    /// Log the HUD every this many frames
    pub hud_log_interval: u64,

    // === Autopilot ===
    pub autopilot_reaction_ms: u64,
    pub autopilot_miss_chance: f64,
    pub autopilot_bomb_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        let pilot = AutopilotConfig::default();
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,
            rounds: 3,
            fast_forward: true,
            hud_log_interval: 120,

            autopilot_reaction_ms: pilot.reaction_ms,
            autopilot_miss_chance: pilot.miss_chance,
            autopilot_bomb_chance: pilot.bomb_chance,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into usable ranges
    pub fn sanitized(mut self) -> Self {
        // Room for at least one object between the spawn margins
        let min_width = OBJECT_SIZE + 2.0 * SPAWN_MARGIN;
        self.arena_width = self.arena_width.max(min_width);
        self.arena_height = self.arena_height.max(OBJECT_SIZE);
        self.tick_rate = self.tick_rate.clamp(1, 1000);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.autopilot_miss_chance = self.autopilot_miss_chance.clamp(0.0, 1.0);
        self.autopilot_bomb_chance = self.autopilot_bomb_chance.clamp(0.0, 1.0);
        self.hud_log_interval = self.hud_log_interval.max(1);
        self
    }

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    pub fn audio(&self) -> AudioManager {
        let mut audio = AudioManager::new();
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
        audio
    }

    pub fn autopilot(&self) -> AutopilotConfig {
        AutopilotConfig {
            reaction_ms: self.autopilot_reaction_ms,
            miss_chance: self.autopilot_miss_chance,
            bomb_chance: self.autopilot_bomb_chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.muted);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.tick_rate, TICK_RATE);
        assert_eq!(settings.audio().effective_volume(), 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json(r#"{ "tick_rate": "fast" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.rounds = 9;
        assert_eq!(Settings::from_json(&settings.to_json()).unwrap(), settings);
    }

    #[test]
    fn test_sanitize() {
        let settings = Settings {
            arena_width: 10.0,
            tick_rate: 0,
            autopilot_miss_chance: 4.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.arena_width, 140.0);
        assert_eq!(settings.tick_rate, 1);
        assert_eq!(settings.autopilot_miss_chance, 1.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Some(Path::new("/nonexistent/fruit-slicer.json")));
        assert_eq!(settings, Settings::default());
    }
}
