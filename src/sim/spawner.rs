//! Time-driven object spawning
//!
//! Each kind has its own fixed cadence. Nothing spawns while time is frozen,
//! and frozen time builds no backlog: the timers are simply not consulted.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::object::{FallingObject, ObjectKind};
use super::timer::IntervalTimer;
use crate::consts::*;

/// Which spawn timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Fruit,
    Ice,
    Bomb,
}

/// Three independent spawn timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    fruit: IntervalTimer,
    ice: IntervalTimer,
    bomb: IntervalTimer,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Spawner {
    /// All timers count from `start` (the first fruit shows up 1.2s later)
    pub fn new(start: u64) -> Self {
        Self {
            fruit: IntervalTimer::new(FRUIT_INTERVAL_MS, start),
            ice: IntervalTimer::new(ICE_INTERVAL_MS, start),
            bomb: IntervalTimer::new(BOMB_INTERVAL_MS, start),
        }
    }

    pub fn timer(&self, kind: SpawnKind) -> &IntervalTimer {
        match kind {
            SpawnKind::Fruit => &self.fruit,
            SpawnKind::Ice => &self.ice,
            SpawnKind::Bomb => &self.bomb,
        }
    }

    /// Fire every due timer, in fruit, ice, bomb order
    pub fn fire(&mut self, now: u64, time_frozen: bool) -> Vec<SpawnKind> {
        if time_frozen {
            return Vec::new();
        }
        let mut fired = Vec::with_capacity(3);
        if self.fruit.try_fire(now) {
            fired.push(SpawnKind::Fruit);
        }
        if self.ice.try_fire(now) {
            fired.push(SpawnKind::Ice);
        }
        if self.bomb.try_fire(now) {
            fired.push(SpawnKind::Bomb);
        }
        fired
    }
}

/// Random uppercase letter
fn random_letter<R: Rng>(rng: &mut R) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}

/// Build a new object of `kind` at the top of an arena `arena_width` wide.
///
/// Draw order is fixed (x, speed, then letter/variant) so a seeded RNG
/// reproduces the same objects.
pub fn make_object<R: Rng>(kind: SpawnKind, id: u32, arena_width: f32, rng: &mut R) -> FallingObject {
    let min_x = SPAWN_MARGIN as i32;
    let max_x = ((arena_width - OBJECT_SIZE - SPAWN_MARGIN) as i32).max(min_x);
    let x = rng.random_range(min_x..=max_x) as f32;
    let speed = rng.random_range(MIN_SPEED..MAX_SPEED);
    let pos = Vec2::new(x, 0.0);

    match kind {
        SpawnKind::Fruit => {
            let letter = random_letter(rng);
            let variant = rng.random_range(0..FRUIT_VARIANTS);
            FallingObject::new(id, ObjectKind::Fruit { variant }, pos, speed, Some(letter))
        }
        SpawnKind::Ice => {
            let letter = random_letter(rng);
            FallingObject::new(id, ObjectKind::Ice, pos, speed, Some(letter))
        }
        SpawnKind::Bomb => FallingObject::new(id, ObjectKind::Bomb, pos, speed, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_fruit_after_interval() {
        let mut spawner = Spawner::new(0);
        assert!(spawner.fire(0, false).is_empty());
        assert!(spawner.fire(1199, false).is_empty());
        assert_eq!(spawner.fire(1200, false), vec![SpawnKind::Fruit]);
        assert!(spawner.fire(1201, false).is_empty());
    }

    #[test]
    fn test_all_kinds_fire_in_order() {
        let mut spawner = Spawner::new(0);
        assert_eq!(
            spawner.fire(15_000, false),
            vec![SpawnKind::Fruit, SpawnKind::Ice, SpawnKind::Bomb]
        );
    }

    #[test]
    fn test_frozen_suppresses_without_backlog() {
        let mut spawner = Spawner::new(0);
        assert!(spawner.fire(5000, true).is_empty());
        assert_eq!(spawner.timer(SpawnKind::Fruit).started_at(), 0);
        // On unfreeze the overdue fruit timer fires exactly once
        assert_eq!(spawner.fire(5001, false), vec![SpawnKind::Fruit]);
        assert!(spawner.fire(5002, false).is_empty());
    }

    #[test]
    fn test_bomb_has_no_letter() {
        let mut rng = Pcg32::seed_from_u64(3);
        let bomb = make_object(SpawnKind::Bomb, 1, ARENA_WIDTH, &mut rng);
        assert_eq!(bomb.kind, ObjectKind::Bomb);
        assert!(bomb.letter().is_none());
        let ice = make_object(SpawnKind::Ice, 2, ARENA_WIDTH, &mut rng);
        assert!(ice.letter().is_some());
    }

    #[test]
    fn test_same_seed_same_objects() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for id in 0..20 {
            assert_eq!(
                make_object(SpawnKind::Fruit, id, ARENA_WIDTH, &mut a),
                make_object(SpawnKind::Fruit, id, ARENA_WIDTH, &mut b)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_placement(seed in any::<u64>(), kind in 0u8..3) {
            let kind = [SpawnKind::Fruit, SpawnKind::Ice, SpawnKind::Bomb][kind as usize];
            let mut rng = Pcg32::seed_from_u64(seed);
            let obj = make_object(kind, 1, ARENA_WIDTH, &mut rng);
            prop_assert!(obj.pos.x >= 20.0 && obj.pos.x <= ARENA_WIDTH - 120.0);
            prop_assert_eq!(obj.pos.y, 0.0);
            prop_assert!(obj.speed() >= 1.0 && obj.speed() < 2.0);
            prop_assert!(!obj.is_sliced());
            if let Some(letter) = obj.letter() {
                prop_assert!(letter.is_ascii_uppercase());
            }
            if let ObjectKind::Fruit { variant } = obj.kind {
                prop_assert!(variant < FRUIT_VARIANTS);
            }
        }
    }
}
