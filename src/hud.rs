//! Host notifications and a ready-made recorder for them.

use thousands::Separable;

/// Callbacks a host receives from a running session.
///
/// Each run-state callback fires once when the session starts, with the
/// initial value, and then whenever that value changes.
pub trait Hooks {
    fn on_score_change(&mut self, _score: u32) {}
    fn on_lives_change(&mut self, _lives: u8) {}
    fn on_level_change(&mut self, _level: u32) {}
    /// The player asked to close the game. The host is expected to dispose the session.
    fn on_close(&mut self) {}
}

/// Ignores every notification.
impl Hooks for () {}

/// Remembers the latest values reported by a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudState {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub close_requested: bool,
    dirty: bool,
}

impl HudState {
    /// Window title showing the current values, with thousands separators.
    pub fn title(&self) -> String {
        format!(
            "Pac-BOX | Score: {} | Lives: {} | Level: {}",
            self.score.separate_with_commas(),
            self.lives,
            self.level.separate_with_commas()
        )
    }

    /// Returns whether anything changed since the previous call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Hooks for HudState {
    fn on_score_change(&mut self, score: u32) {
        self.score = score;
        self.dirty = true;
    }

    fn on_lives_change(&mut self, lives: u8) {
        self.lives = lives;
        self.dirty = true;
    }

    fn on_level_change(&mut self, level: u32) {
        self.level = level;
        self.dirty = true;
    }

    fn on_close(&mut self) {
        self.close_requested = true;
    }
}
