//! Round outcome reporting
//!
//! The terminal summary handed to the game-over screen.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_STRIKES;

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// A bomb was sliced
    Bomb,
    /// Too many objects fell past the bottom edge
    Strikes,
}

/// Final score and strikes of a lost round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub score: u32,
    pub strikes: u32,
    pub cause: LossCause,
}

impl RoundReport {
    /// Game-over banner. Names the strike limit, not the tally, which can
    /// overshoot when several objects leave on the same tick.
    pub fn headline(&self) -> String {
        match self.cause {
            LossCause::Bomb => "You hit a bomb! GAME OVER".to_string(),
            LossCause::Strikes => format!("You reached {} strikes! GAME OVER", MAX_STRIKES),
        }
    }

    pub fn final_score_line(&self) -> String {
        format!("Final score: {}", self.score)
    }
}
