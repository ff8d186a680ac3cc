//! Round state and core simulation types
//!
//! Everything a single round owns lives here and is dropped with it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effect::SlashEffect;
use super::object::{FallingObject, ObjectKind};
use super::outcome::{LossCause, RoundReport};
use super::spawner::{SpawnKind, Spawner, make_object};
use super::timer::IntervalTimer;
use crate::consts::*;

/// Where the round is in its lifecycle. Everything but `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay (a time freeze is a sub-state of this)
    Running,
    /// Strike limit reached
    LostByStrikes,
    /// A bomb was sliced
    LostByBomb,
    /// Player quit; no report is produced
    Quit,
}

impl RoundPhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundPhase::Running)
    }
}

/// Something that happened during a tick, for audio and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: SpawnKind },
    /// An object was sliced at `at` (its center before slicing)
    Sliced { id: u32, kind: ObjectKind, at: Vec2 },
    FreezeStarted,
    FreezeEnded,
    /// An intact object fell out; `strikes` is the new total
    Strike { id: u32, strikes: u32 },
    RoundOver(RoundReport),
}

/// Play area size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Round seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub phase: RoundPhase,
    pub score: u32,
    /// Objects missed so far
    pub strikes: u32,
    /// Ticks executed
    pub time_ticks: u64,
    /// Clock sample (ms since round start) of the latest tick
    pub now_ms: u64,
    /// Active freeze window, if any
    pub freeze: Option<IntervalTimer>,
    pub spawner: Spawner,
    /// Live objects in spawn order
    pub objects: Vec<FallingObject>,
    /// Live slash markers in creation order
    pub effects: Vec<SlashEffect>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl RoundState {
    /// Create a fresh round. Spawn timers count from tick 0.
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            arena,
            phase: RoundPhase::Running,
            score: 0,
            strikes: 0,
            time_ticks: 0,
            now_ms: 0,
            freeze: None,
            spawner: Spawner::new(0),
            objects: Vec::new(),
            effects: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.is_some()
    }

    /// Create an object of `kind` at the top of the arena and append it
    pub fn spawn(&mut self, kind: SpawnKind) -> u32 {
        let id = self.next_entity_id();
        let obj = make_object(kind, id, self.arena.width, &mut self.rng);
        log::trace!("spawn {:?} #{} at x={} letter={:?}", kind, id, obj.pos.x, obj.letter());
        self.objects.push(obj);
        self.events.push(GameEvent::Spawned { id, kind });
        id
    }

    /// Append an already-built object (tests and scripted scenarios)
    pub fn insert_object(&mut self, mut obj: FallingObject) -> u32 {
        obj.id = self.next_entity_id();
        let id = obj.id;
        self.objects.push(obj);
        id
    }

    pub fn object(&self, id: u32) -> Option<&FallingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Report for the current score and strikes
    pub fn report(&self, cause: LossCause) -> RoundReport {
        RoundReport {
            score: self.score,
            strikes: self.strikes,
            cause,
        }
    }

    /// Terminal report, if the round was lost (quitting has none)
    pub fn outcome(&self) -> Option<RoundReport> {
        match self.phase {
            RoundPhase::LostByBomb => Some(self.report(LossCause::Bomb)),
            RoundPhase::LostByStrikes => Some(self.report(LossCause::Strikes)),
            RoundPhase::Running | RoundPhase::Quit => None,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let state = RoundState::new(1, Arena::default());
        assert_eq!(state.phase, RoundPhase::Running);
        assert_eq!((state.score, state.strikes), (0, 0));
        assert!(state.objects.is_empty());
        assert!(!state.is_frozen());
        assert!(state.outcome().is_none());
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut state = RoundState::new(5, Arena::default());
        let a = state.spawn(SpawnKind::Fruit);
        let b = state.spawn(SpawnKind::Bomb);
        assert!(a < b);
        let ids: Vec<u32> = state.objects.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(state.drain_events().len(), 2);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_outcome_by_phase() {
        let mut state = RoundState::new(5, Arena::default());
        state.score = 9;
        state.phase = RoundPhase::LostByBomb;
        assert_eq!(state.outcome().map(|r| r.cause), Some(LossCause::Bomb));
        state.phase = RoundPhase::Quit;
        assert!(state.outcome().is_none());
    }
}
