//! Score, lives, level and the running flag.

use bitflags::bitflags;
use tracing::{debug, info};

use crate::constants::STARTING_LIVES;

bitflags! {
    /// Run state fields modified since the host was last notified.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Changes: u8 {
        const SCORE = 1 << 0;
        const LIVES = 1 << 1;
        const LEVEL = 1 << 2;
    }
}

/// Progress of the current run. Survives a lost life, not a game over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    score: u32,
    lives: u8,
    level: u32,
    running: bool,
    changes: Changes,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            running: true,
            changes: Changes::all(),
        }
    }
}

impl RunState {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            debug!(running, "Running flag changed");
        }
        self.running = running;
    }

    pub fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.changes |= Changes::SCORE;
    }

    /// Advances to the next level.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.changes |= Changes::LEVEL;
        info!(level = self.level, score = self.score, "Level cleared");
    }

    /// Takes one life away. Returns true when that was the last one, in which
    /// case the run has already been reset.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.changes |= Changes::LIVES;
        if self.lives == 0 {
            info!(score = self.score, level = self.level, "Game over");
            self.reset();
            return true;
        }
        debug!(lives = self.lives, "Life lost");
        false
    }

    /// Zero score, first level, full lives. Leaves the running flag alone.
    pub fn reset(&mut self) {
        if self.score != 0 {
            self.changes |= Changes::SCORE;
        }
        if self.level != 1 {
            self.changes |= Changes::LEVEL;
        }
        if self.lives != STARTING_LIVES {
            self.changes |= Changes::LIVES;
        }
        self.score = 0;
        self.level = 1;
        self.lives = STARTING_LIVES;
    }

    /// Returns and clears the set of fields changed since the previous call.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_reports_everything() {
        let mut state = RunState::default();
        assert_eq!(state.take_changes(), Changes::all());
        assert_eq!(state.take_changes(), Changes::empty());
    }

    #[test]
    fn test_last_life_resets_run() {
        let mut state = RunState::default();
        state.add_score(120);
        state.level_up();
        assert!(!state.lose_life());
        assert!(!state.lose_life());
        assert!(state.lose_life());
        assert_eq!((state.score(), state.level(), state.lives()), (0, 1, STARTING_LIVES));
    }
}
