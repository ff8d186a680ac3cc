//! Per-tick draw data handed to the presentation layer
//!
//! A frame is a plain snapshot: the renderer maps kinds to sprites and never
//! touches `RoundState` directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::object::{FallingObject, ObjectKind};
use super::state::RoundState;
use crate::consts::OBJECT_SIZE;

/// Offset from an object's center to where its letter glyph is drawn
const LABEL_INSET: f32 = 20.0;

/// One object as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: u32,
    pub kind: ObjectKind,
    /// Top-left of the intact box
    pub pos: Vec2,
    /// Top-left of the left and right halves once sliced
    pub halves: Option<[Vec2; 2]>,
    /// Letter and where to draw it (intact objects only)
    pub label: Option<(char, Vec2)>,
}

impl ObjectView {
    pub fn is_sliced(&self) -> bool {
        self.halves.is_some()
    }
}

impl From<&FallingObject> for ObjectView {
    fn from(obj: &FallingObject) -> Self {
        let halves = obj.halves().map(|(l, r)| [l, r]);
        let label = match (halves, obj.letter()) {
            (None, Some(c)) => {
                Some((c, obj.pos + Vec2::splat(OBJECT_SIZE / 2.0 - LABEL_INSET)))
            }
            _ => None,
        };
        Self {
            id: obj.id,
            kind: obj.kind,
            pos: obj.pos,
            halves,
            label,
        }
    }
}

/// One slash marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub pos: Vec2,
    pub rotation_deg: f32,
}

/// Everything the presentation layer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub now_ms: u64,
    pub objects: Vec<ObjectView>,
    pub effects: Vec<EffectView>,
    pub score: u32,
    pub strikes: u32,
    pub frozen: bool,
}

impl Frame {
    /// Snapshot the round, objects in spawn order
    pub fn capture(state: &RoundState) -> Self {
        Self {
            tick: state.time_ticks,
            now_ms: state.now_ms,
            objects: state.objects.iter().map(ObjectView::from).collect(),
            effects: state
                .effects
                .iter()
                .map(|e| EffectView {
                    pos: e.pos,
                    rotation_deg: e.rotation_deg,
                })
                .collect(),
            score: state.score,
            strikes: state.strikes,
            frozen: state.is_frozen(),
        }
    }

    /// HUD text, top-left, one entry per line
    pub fn hud_lines(&self) -> [String; 2] {
        [
            format!("Score: {}", self.score),
            format!("Strikes: {}", self.strikes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Arena;

    #[test]
    fn test_capture() {
        let mut state = RoundState::new(1, Arena::default());
        let intact = state.insert_object(FallingObject::new(
            0,
            ObjectKind::Ice,
            Vec2::new(100.0, 200.0),
            1.0,
            Some('Q'),
        ));
        let sliced = state.insert_object(FallingObject::new(
            0,
            ObjectKind::Bomb,
            Vec2::new(400.0, 10.0),
            1.0,
            None,
        ));
        state.objects[1].mark_sliced(0);
        state.score = 3;

        let frame = Frame::capture(&state);
        assert_eq!(frame.objects.len(), 2);
        assert_eq!(frame.objects[0].id, intact);
        assert_eq!(frame.objects[0].label, Some(('Q', Vec2::new(130.0, 230.0))));
        assert!(!frame.objects[0].is_sliced());
        assert_eq!(frame.objects[1].id, sliced);
        assert_eq!(
            frame.objects[1].halves,
            Some([Vec2::new(360.0, 10.0), Vec2::new(440.0, 10.0)])
        );
        assert_eq!(frame.hud_lines(), ["Score: 3".to_string(), "Strikes: 0".to_string()]);
    }
}
