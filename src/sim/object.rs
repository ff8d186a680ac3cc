//! Falling objects: fruit, ice and bombs
//!
//! An object is either intact (falls at its own speed, can be hit) or sliced
//! (two halves drift apart and drop, purely for show until removed).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::timer::IntervalTimer;
use crate::box_contains;
use crate::consts::*;

/// What an object is. Fruit carries its visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Scores a point when sliced
    Fruit { variant: u8 },
    /// Freezes time when sliced
    Ice,
    /// Ends the round when sliced
    Bomb,
}

impl ObjectKind {
    /// Only fruit and ice are labelled with a letter
    pub fn has_letter(&self) -> bool {
        !matches!(self, ObjectKind::Bomb)
    }
}

/// Slice animation state. Exists only once the object has been sliced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceAnim {
    /// Started at the slice; the halves are dropped once it has run out
    pub lifetime: IntervalTimer,
    /// Horizontal offset of the left half from the object origin
    pub left_offset: f32,
    /// Horizontal offset of the right half from the object origin
    pub right_offset: f32,
    /// Shared vertical offset of both halves
    pub y_offset: f32,
}

impl SliceAnim {
    fn new(sliced_at: u64) -> Self {
        Self {
            lifetime: IntervalTimer::new(SLICE_LIFETIME_MS, sliced_at),
            left_offset: -SLICE_START_OFFSET,
            right_offset: SLICE_START_OFFSET,
            y_offset: 0.0,
        }
    }

    fn step(&mut self) {
        self.left_offset -= SLICE_DRIFT_PER_TICK;
        self.right_offset += SLICE_DRIFT_PER_TICK;
        self.y_offset += SLICE_FALL_PER_TICK;
    }
}

/// A falling object entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// Top-left corner of the object's box
    pub pos: Vec2,
    /// Fall speed (px per tick), fixed at spawn
    speed: f32,
    /// Key that slices this object (fruit and ice only)
    letter: Option<char>,
    slice: Option<SliceAnim>,
}

impl FallingObject {
    pub fn new(id: u32, kind: ObjectKind, pos: Vec2, speed: f32, letter: Option<char>) -> Self {
        debug_assert_eq!(
            kind.has_letter(),
            letter.is_some(),
            "fruit and ice carry a letter, bombs never do"
        );
        Self {
            id,
            kind,
            pos,
            speed,
            letter,
            slice: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_sliced(&self) -> bool {
        self.slice.is_some()
    }

    /// Tick at which the object was sliced, `None` while intact
    pub fn sliced_at(&self) -> Option<u64> {
        self.slice.map(|s| s.lifetime.started_at())
    }

    pub fn slice_anim(&self) -> Option<&SliceAnim> {
        self.slice.as_ref()
    }

    /// Center of the intact object's box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(OBJECT_SIZE / 2.0)
    }

    /// Top-left corners of the left and right halves, if sliced
    pub fn halves(&self) -> Option<(Vec2, Vec2)> {
        self.slice.map(|s| {
            (
                self.pos + Vec2::new(s.left_offset, s.y_offset),
                self.pos + Vec2::new(s.right_offset, s.y_offset),
            )
        })
    }

    /// Advance one tick.
    ///
    /// Intact objects fall unless time is frozen. Slice halves keep animating
    /// through a freeze.
    pub fn advance(&mut self, time_frozen: bool) {
        match self.slice.as_mut() {
            Some(anim) => anim.step(),
            None if !time_frozen => self.pos.y += self.speed,
            None => {}
        }
    }

    /// Switch to the sliced state. Slicing twice is a caller bug.
    pub fn mark_sliced(&mut self, now: u64) {
        assert!(
            self.slice.is_none(),
            "object {} sliced twice (first at {:?})",
            self.id,
            self.sliced_at()
        );
        self.slice = Some(SliceAnim::new(now));
    }

    /// Pointer hit test against the intact box, or either half once sliced
    pub fn hit_test(&self, point: Vec2) -> bool {
        let size = Vec2::splat(OBJECT_SIZE);
        match self.halves() {
            Some((left, right)) => {
                box_contains(left, size, point) || box_contains(right, size, point)
            }
            None => box_contains(self.pos, size, point),
        }
    }

    /// Below the bottom edge (halves are measured by their shared drop)
    pub fn is_offscreen(&self, screen_height: f32) -> bool {
        let y = match &self.slice {
            Some(s) => self.pos.y + s.y_offset,
            None => self.pos.y,
        };
        y > screen_height
    }

    /// Sliced more than `SLICE_LIFETIME_MS` ago
    pub fn is_expired_since_slice(&self, now: u64) -> bool {
        self.slice.is_some_and(|s| s.lifetime.is_past(now))
    }
}
