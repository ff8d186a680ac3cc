//! Platform abstraction layer
//!
//! Host-side collaborators of the simulation:
//! - Time: monotonic millisecond clock and frame pacing
//! - Input: sources of per-tick player intent
//! - Autopilot: a demo player for headless runs

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::{Autopilot, AutopilotConfig};
pub use input::{InputSource, ScriptedInput};
pub use time::{Clock, FramePacer, ManualClock, MonotonicClock};
