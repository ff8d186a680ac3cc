//! Slice sound cues
//!
//! The simulation only says *which* sound; backends map the cue to an asset.

use crate::sim::ObjectKind;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fruit sliced
    FruitSlice,
    /// Ice sliced (time freeze)
    IceSlice,
    /// Bomb sliced
    BombSlice,
}

impl SoundEffect {
    /// Asset name the backend plays for this cue
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::FruitSlice => "slice_fruit",
            SoundEffect::IceSlice => "slice_ice",
            SoundEffect::BombSlice => "slice_bomb",
        }
    }
}

impl From<ObjectKind> for SoundEffect {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Fruit { .. } => SoundEffect::FruitSlice,
            ObjectKind::Ice => SoundEffect::IceSlice,
            ObjectKind::Bomb => SoundEffect::BombSlice,
        }
    }
}

/// Fire-and-forget audio trigger. Must never block the game loop.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
///
/// Applies volume and mute, then hands cues to the native backend, which
/// writes them to the log.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues actually played (muted cues are dropped)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {} (vol {:.2})", effect.asset_name(), vol);
    }
}
