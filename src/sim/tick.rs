//! Per-tick simulation step
//!
//! Core game loop body. Order matters: input resolves against positions from
//! the previous tick, then freeze expiry, spawning, movement and pruning.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::object::ObjectKind;
use super::state::{GameEvent, RoundPhase, RoundState};
use super::timer::IntervalTimer;
use crate::consts::*;

/// One player intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keypress resolved to a letter
    Key(char),
    /// Pointer pressed at a screen position
    Pointer(Vec2),
    /// Leave the round without a report
    Quit,
}

/// Input gathered for a single tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn key(letter: char) -> Self {
        Self {
            events: vec![InputEvent::Key(letter)],
        }
    }

    pub fn pointer(pos: Vec2) -> Self {
        Self {
            events: vec![InputEvent::Pointer(pos)],
        }
    }

    pub fn quit() -> Self {
        Self {
            events: vec![InputEvent::Quit],
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Advance the round by one tick. `now` is the clock sample (ms since round
/// start) taken once for this tick.
///
/// A round that has already ended is left untouched.
pub fn tick(state: &mut RoundState, input: &TickInput, now: u64) {
    if state.phase.is_over() {
        return;
    }

    state.time_ticks += 1;
    state.now_ms = now;

    // 1. Input: each event slices at most the first matching intact object
    for event in &input.events {
        let target = match *event {
            InputEvent::Quit => {
                log::debug!("round quit at tick {}", state.time_ticks);
                state.phase = RoundPhase::Quit;
                return;
            }
            InputEvent::Key(letter) => {
                let letter = letter.to_ascii_uppercase();
                state
                    .objects
                    .iter()
                    .position(|o| !o.is_sliced() && o.letter() == Some(letter))
            }
            InputEvent::Pointer(point) => state
                .objects
                .iter()
                .position(|o| !o.is_sliced() && o.hit_test(point)),
        };

        if let Some(index) = target {
            slice_object(state, index, now);
            if state.phase.is_over() {
                // Bomb: nothing else runs this tick
                return;
            }
        }
    }

    // 2. Freeze expiry
    if state.freeze.is_some_and(|f| f.is_due(now)) {
        state.freeze = None;
        state.events.push(GameEvent::FreezeEnded);
        log::debug!("freeze ended at {}ms", now);
    }
    let frozen = state.is_frozen();

    // 3. Spawn
    for kind in state.spawner.fire(now, frozen) {
        state.spawn(kind);
    }

    // 4. Advance, then mark and compact
    let height = state.arena.height;
    let mut doomed = Vec::with_capacity(state.objects.len());
    for obj in state.objects.iter_mut() {
        obj.advance(frozen);
        let remove = if obj.is_sliced() {
            obj.is_offscreen(height) || obj.is_expired_since_slice(now)
        } else if obj.is_offscreen(height) {
            state.strikes += 1;
            state.events.push(GameEvent::Strike {
                id: obj.id,
                strikes: state.strikes,
            });
            log::debug!("missed {:?} #{} (strikes {})", obj.kind, obj.id, state.strikes);
            true
        } else {
            false
        };
        doomed.push(remove);
    }
    let mut index = 0;
    state.objects.retain(|_| {
        let keep = !doomed[index];
        index += 1;
        keep
    });

    // 5. Effects
    state.effects.retain(|e| !e.is_expired(now));

    // 6. Loss check
    if state.strikes >= MAX_STRIKES {
        state.phase = RoundPhase::LostByStrikes;
        end_round(state);
    }
}

/// Slice the object at `index` and apply its outcome
fn slice_object(state: &mut RoundState, index: usize, now: u64) {
    let obj = &mut state.objects[index];
    let center = obj.center();
    obj.mark_sliced(now);
    let (id, kind) = (obj.id, obj.kind);

    let rotation = f32::from(state.rng.random_range(0..=360u16));
    let fx_id = state.next_entity_id();
    state
        .effects
        .push(super::effect::SlashEffect::new(fx_id, center, rotation, now));
    state.events.push(GameEvent::Sliced { id, kind, at: center });
    log::debug!("sliced {:?} #{} at {}ms", kind, id, now);

    match kind {
        ObjectKind::Bomb => {
            state.phase = RoundPhase::LostByBomb;
            end_round(state);
        }
        ObjectKind::Ice => {
            // A fresh window replaces any running one
            state.freeze = Some(IntervalTimer::new(FREEZE_DURATION_MS, now));
            state.events.push(GameEvent::FreezeStarted);
        }
        ObjectKind::Fruit { .. } => state.score += 1,
    }
}

fn end_round(state: &mut RoundState) {
    if let Some(report) = state.outcome() {
        log::info!(
            "round over: {:?} (score {}, strikes {})",
            report.cause,
            report.score,
            report.strikes
        );
        state.events.push(GameEvent::RoundOver(report));
    }
}
