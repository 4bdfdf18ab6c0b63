use glam::IVec2;
use tracing::trace;

use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::movement::Agent;

/// The player agent and its buffered direction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub agent: Agent,
    /// Direction requested by input, committed at the next legal alignment
    pub pending: Option<Direction>,
    spawn: IVec2,
}

impl Player {
    /// Initial heading of a freshly spawned player.
    pub const SPAWN_DIRECTION: Direction = Direction::Right;

    pub fn new(spawn: IVec2) -> Self {
        Self {
            agent: Agent::spawn(spawn, Some(Self::SPAWN_DIRECTION)),
            pending: None,
            spawn,
        }
    }

    pub fn spawn_cell(&self) -> IVec2 {
        self.spawn
    }

    /// Puts the player back on its spawn, heading right, with no buffered request.
    pub fn reset(&mut self) {
        *self = Self::new(self.spawn);
    }

    /// Buffers a direction request. A later request replaces an earlier one.
    pub fn request(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Advances the player by one simulation step.
    ///
    /// A buffered request is only committed while aligned and only when the cell
    /// it points at is walkable; otherwise it stays buffered.
    pub fn step(&mut self, maze: &Maze, speed: f32, dt: f32) {
        let Player { agent, pending, .. } = self;
        agent.advance(maze, speed * dt, |cell, current| {
            if let Some(requested) = *pending {
                if !maze.is_wall(cell + requested.as_ivec2()) {
                    *pending = None;
                    if current != Some(requested) {
                        let name: &str = requested.as_ref();
                        trace!(?cell, direction = name, "Player turned");
                    }
                    return Some(requested);
                }
            }
            current
        });
    }
}
