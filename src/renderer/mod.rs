//! Presentation sinks
//!
//! Receive one `Frame` per tick and the final report. Sprites, fonts and
//! windowing belong to the concrete sink, never to the simulation.

pub mod json_lines;
pub mod log_renderer;

pub use json_lines::JsonLinesRenderer;
pub use log_renderer::LogRenderer;

use crate::sim::{Frame, RoundReport};

pub trait PresentationSink {
    /// Draw the current tick
    fn present(&mut self, frame: &Frame);

    /// Show the game-over screen
    fn round_ended(&mut self, report: &RoundReport);
}
