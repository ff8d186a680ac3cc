//! Fixed-rate game loop
//!
//! Owns one round and drives it against the host's clock, input, audio and
//! presentation. Each tick samples the clock exactly once.

use crate::audio::{AudioSink, SoundEffect};
use crate::platform::{Clock, FramePacer, InputSource};
use crate::renderer::PresentationSink;
use crate::sim::{Arena, Frame, GameEvent, RoundPhase, RoundReport, RoundState, tick};

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Lost(RoundReport),
    /// Player quit; not a game over
    Quit,
}

/// The collaborators a round talks to
pub struct Host<'a> {
    pub clock: &'a mut dyn Clock,
    pub input: &'a mut dyn InputSource,
    pub presenter: &'a mut dyn PresentationSink,
    pub audio: &'a mut dyn AudioSink,
}

pub struct GameLoop {
    state: RoundState,
    pacer: FramePacer,
    /// Clock reading at round start; the simulation sees time relative to it
    started_at: u64,
    last_frame: Frame,
}

impl GameLoop {
    /// Start a round at host time `started_at`
    pub fn new(seed: u64, arena: Arena, tick_rate: u32, started_at: u64) -> Self {
        let state = RoundState::new(seed, arena);
        let last_frame = Frame::capture(&state);
        log::info!("round started (seed {})", seed);
        Self {
            state,
            pacer: FramePacer::new(tick_rate),
            started_at,
            last_frame,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    /// Run one tick. Returns how the round ended once it has.
    pub fn step(&mut self, host: &mut Host<'_>) -> Option<RoundEnd> {
        if let Some(end) = self.end() {
            return Some(end);
        }

        let now = host.clock.now_ms().saturating_sub(self.started_at);
        let input = host.input.poll(now, &self.last_frame);
        tick(&mut self.state, &input, now);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Sliced { kind, .. } => host.audio.play(SoundEffect::from(kind)),
                GameEvent::RoundOver(report) => host.presenter.round_ended(&report),
                _ => {}
            }
        }

        if self.state.phase == RoundPhase::Running {
            self.last_frame = Frame::capture(&self.state);
            host.presenter.present(&self.last_frame);
        }
        self.end()
    }

    /// Tick at the target rate until the round ends
    pub fn run(&mut self, host: &mut Host<'_>) -> RoundEnd {
        loop {
            if let Some(end) = self.step(host) {
                return end;
            }
            let deadline = self.started_at + self.pacer.next_deadline();
            host.clock.wait_until(deadline);
        }
    }

    fn end(&self) -> Option<RoundEnd> {
        match self.state.phase {
            RoundPhase::Running => None,
            RoundPhase::Quit => Some(RoundEnd::Quit),
            RoundPhase::LostByBomb | RoundPhase::LostByStrikes => {
                self.state.outcome().map(RoundEnd::Lost)
            }
        }
    }
}
