//! Round and score lifecycle.

use crate::components::Side;
use crate::resources::Score;

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for a start trigger; the ball holds its serve
    Idle,
    /// Rally in progress
    Active,
}

/// Phase plus the running score
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub score: Score,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Idle,
            score: Score::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == MatchPhase::Active
    }

    /// Begin a rally; returns false if one is already running
    pub fn start(&mut self) -> bool {
        if self.phase == MatchPhase::Idle {
            self.phase = MatchPhase::Active;
            true
        } else {
            false
        }
    }

    /// End the rally, crediting the given side and returning to idle
    pub fn end_round(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.score.increment_left(),
            Side::Right => self.score.increment_right(),
        }
        self.phase = MatchPhase::Idle;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
