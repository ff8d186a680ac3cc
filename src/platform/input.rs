//! Input sources

use std::collections::VecDeque;

use crate::sim::{Frame, InputEvent, TickInput};

/// Delivers the player's intents for the upcoming tick.
///
/// `frame` is the last thing shown to the player, which is what a human
/// would be reacting to.
pub trait InputSource {
    fn poll(&mut self, now_ms: u64, frame: &Frame) -> TickInput;
}

/// Pre-recorded input, released once its timestamp is reached
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<(u64, InputEvent)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for the first tick at or after `at_ms`. Events must be
    /// queued in time order.
    pub fn at(mut self, at_ms: u64, event: InputEvent) -> Self {
        debug_assert!(
            self.pending.back().is_none_or(|(t, _)| *t <= at_ms),
            "scripted input out of order"
        );
        self.pending.push_back((at_ms, event));
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, now_ms: u64, _frame: &Frame) -> TickInput {
        let mut input = TickInput::default();
        while let Some((at, event)) = self.pending.front().copied() {
            if at > now_ms {
                break;
            }
            input.push(event);
            self.pending.pop_front();
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, RoundState};

    #[test]
    fn test_scripted_release() {
        let frame = Frame::capture(&RoundState::new(0, Arena::default()));
        let mut script = ScriptedInput::new()
            .at(100, InputEvent::Key('A'))
            .at(100, InputEvent::Key('B'))
            .at(250, InputEvent::Quit);

        assert!(script.poll(99, &frame).is_empty());
        assert_eq!(
            script.poll(116, &frame).events,
            vec![InputEvent::Key('A'), InputEvent::Key('B')]
        );
        assert!(script.poll(200, &frame).is_empty());
        assert_eq!(script.poll(300, &frame).events, vec![InputEvent::Quit]);
        assert!(script.is_exhausted());
    }
}
