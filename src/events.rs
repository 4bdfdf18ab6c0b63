use strum_macros::AsRefStr;

use crate::map::direction::Direction;

/// An action requested by the host, usually through a key binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GameCommand {
    MovePlayer(Direction),
    TogglePause,
    Restart,
    Close,
}
