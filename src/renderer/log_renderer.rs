//! Text renderer that writes the HUD to the log

use super::PresentationSink;
use crate::sim::{Frame, RoundReport};

/// Logs the HUD every `interval` frames and whenever score or strikes change
#[derive(Debug, Clone)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    last_hud: Option<(u32, u32)>,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_hud: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl PresentationSink for LogRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        let hud = (frame.score, frame.strikes);
        if self.last_hud == Some(hud) && self.frames % self.interval != 0 {
            return;
        }
        self.last_hud = Some(hud);
        let [score, strikes] = frame.hud_lines();
        log::info!(
            "[{:>6}ms] {} | {} | objects {} | slashes {}{}",
            frame.now_ms,
            score,
            strikes,
            frame.objects.len(),
            frame.effects.len(),
            if frame.frozen { " | FROZEN" } else { "" }
        );
    }

    fn round_ended(&mut self, report: &RoundReport) {
        log::info!("{}", report.headline());
        log::info!("{}", report.final_score_line());
    }
}
