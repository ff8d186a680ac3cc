//! Demo player for headless runs
//!
//! Reacts to what is on screen after a delay, types the letter or clicks
//! the object, misses now and then, and occasionally clicks a bomb so demo
//! rounds end both ways.

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::InputSource;
use crate::consts::OBJECT_SIZE;
use crate::sim::{Frame, InputEvent, ObjectKind, TickInput};

/// What the autopilot decided about an object when it first saw it
#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    /// Act once `at_ms` is reached
    Slice { at_ms: u64, by_pointer: bool },
    /// Let it fall
    Ignore,
    Done,
}

/// Autopilot tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotConfig {
    /// Delay between an object appearing and the autopilot acting on it
    pub reaction_ms: u64,
    /// Chance to let a fruit or ice fall
    pub miss_chance: f64,
    /// Chance to click a bomb
    pub bomb_chance: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            reaction_ms: 450,
            miss_chance: 0.12,
            bomb_chance: 0.2,
        }
    }
}

pub struct Autopilot {
    config: AutopilotConfig,
    rng: Pcg32,
    plans: HashMap<u32, Plan>,
}

impl Autopilot {
    pub fn new(seed: u64, config: AutopilotConfig) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            plans: HashMap::new(),
        }
    }

    fn plan_for(&mut self, kind: ObjectKind, now_ms: u64) -> Plan {
        let act_chance = match kind {
            ObjectKind::Bomb => self.config.bomb_chance,
            _ => 1.0 - self.config.miss_chance,
        };
        if !self.rng.random_bool(act_chance.clamp(0.0, 1.0)) {
            return Plan::Ignore;
        }
        // Bombs have no letter, so they can only be clicked
        let by_pointer = kind == ObjectKind::Bomb || self.rng.random_bool(0.3);
        let jitter = self.rng.random_range(0..=self.config.reaction_ms / 2);
        Plan::Slice {
            at_ms: now_ms + self.config.reaction_ms + jitter,
            by_pointer,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, now_ms: u64, frame: &Frame) -> TickInput {
        let mut input = TickInput::default();

        for view in frame.objects.iter().filter(|v| !v.is_sliced()) {
            let plan = match self.plans.get(&view.id) {
                Some(plan) => *plan,
                None => {
                    let plan = self.plan_for(view.kind, now_ms);
                    self.plans.insert(view.id, plan);
                    plan
                }
            };

            if let Plan::Slice { at_ms, by_pointer } = plan {
                if now_ms < at_ms {
                    continue;
                }
                let event = match view.label {
                    Some((letter, _)) if !by_pointer => InputEvent::Key(letter),
                    _ => InputEvent::Pointer(view.pos + Vec2::splat(OBJECT_SIZE / 2.0)),
                };
                log::trace!("autopilot {:?} on #{}", event, view.id);
                input.push(event);
                self.plans.insert(view.id, Plan::Done);
            }
        }

        // Forget objects that left the screen
        self.plans
            .retain(|id, _| frame.objects.iter().any(|v| v.id == *id));
        input
    }
}
