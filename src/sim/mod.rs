//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time arrives as one clock sample per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod effect;
pub mod frame;
pub mod object;
pub mod outcome;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use effect::SlashEffect;
pub use frame::{EffectView, Frame, ObjectView};
pub use object::{FallingObject, ObjectKind, SliceAnim};
pub use outcome::{LossCause, RoundReport};
pub use spawner::{SpawnKind, Spawner, make_object};
pub use state::{Arena, GameEvent, RoundPhase, RoundState};
pub use tick::{InputEvent, TickInput, tick};
pub use timer::IntervalTimer;
