//! Platform-neutral keys and the bindings that turn them into commands.

use std::collections::HashMap;

use crate::events::GameCommand;
use crate::map::direction::Direction;

/// Keys the game reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    P,
    R,
    Space,
    Escape,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Key, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Key::ArrowUp, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Key::W, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Key::ArrowDown, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Key::S, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Key::ArrowLeft, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Key::A, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Key::ArrowRight, GameCommand::MovePlayer(Direction::Right));
        key_bindings.insert(Key::D, GameCommand::MovePlayer(Direction::Right));

        // Session actions
        key_bindings.insert(Key::Space, GameCommand::TogglePause);
        key_bindings.insert(Key::P, GameCommand::TogglePause);
        key_bindings.insert(Key::R, GameCommand::Restart);
        key_bindings.insert(Key::Escape, GameCommand::Close);

        Self { key_bindings }
    }
}

impl Bindings {
    /// The command bound to `key`, if any.
    pub fn command_for(&self, key: Key) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    /// Binds `key` to `command`, returning the command it replaced.
    pub fn bind(&mut self, key: Key, command: GameCommand) -> Option<GameCommand> {
        self.key_bindings.insert(key, command)
    }

    pub fn unbind(&mut self, key: Key) -> Option<GameCommand> {
        self.key_bindings.remove(&key)
    }
}
