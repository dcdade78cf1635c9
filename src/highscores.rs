//! Personal bests for the current run
//!
//! One best score per mode, kept for the life of the process only; restarting
//! a match keeps it, quitting the program drops it.

use serde::{Deserialize, Serialize};

use crate::sim::Mode;

/// The best finished score in one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
    /// Which match of this run set it (1-based)
    pub match_number: u32,
}

/// Personal best per mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    single: Option<BestScore>,
    two_player: Option<BestScore>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, mode: Mode) -> Option<BestScore> {
        match mode {
            Mode::Single => self.single,
            Mode::TwoPlayer => self.two_player,
        }
    }

    /// Record a finished score. Returns true if it beat the mode's best.
    ///
    /// Zero never counts, and a tie keeps the earlier match.
    pub fn record(&mut self, mode: Mode, score: u32, match_number: u32) -> bool {
        if score == 0 {
            return false;
        }
        let slot = match mode {
            Mode::Single => &mut self.single,
            Mode::TwoPlayer => &mut self.two_player,
        };
        if slot.is_some_and(|best| best.score >= score) {
            return false;
        }
        *slot = Some(BestScore {
            score,
            match_number,
        });
        true
    }
}
