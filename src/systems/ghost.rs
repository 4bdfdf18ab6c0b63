//! Ghost agents and their decision policy.

use std::cmp::Reverse;

use glam::IVec2;
use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};
use tracing::trace;

use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::movement::Agent;

/// Speeds used by every ghost during one step, in cells per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostSpeeds {
    pub hunting: f32,
    pub frightened: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub agent: Agent,
    /// Seconds of frightened time left, zero when hunting
    pub frightened: f32,
    /// Index into the ghost palette
    pub id: usize,
    spawn: IVec2,
}

impl Ghost {
    /// Initial heading of a freshly spawned ghost.
    pub const SPAWN_DIRECTION: Direction = Direction::Up;

    pub fn new(id: usize, spawn: IVec2) -> Self {
        Self {
            agent: Agent::spawn(spawn, Some(Self::SPAWN_DIRECTION)),
            frightened: 0.0,
            id,
            spawn,
        }
    }

    pub fn spawn_cell(&self) -> IVec2 {
        self.spawn
    }

    /// Returns the ghost to its spawn, heading up, hunting.
    pub fn reset(&mut self) {
        *self = Self::new(self.id, self.spawn);
    }

    pub fn is_frightened(&self) -> bool {
        self.frightened > 0.0
    }

    pub fn frighten(&mut self, duration: f32) {
        self.frightened = duration.max(0.0);
    }

    /// Advances the ghost by one simulation step, chasing or fleeing `target`.
    ///
    /// The frightened countdown runs down first, so a ghost whose timer expires
    /// during this step already moves at hunting speed.
    pub fn step(&mut self, maze: &Maze, target: IVec2, speeds: GhostSpeeds, dt: f32) {
        if self.frightened > 0.0 {
            self.frightened = (self.frightened - dt).max(0.0);
        }

        let fleeing = self.is_frightened();
        let speed = if fleeing { speeds.frightened } else { speeds.hunting };
        let id = self.id;

        self.agent.advance(maze, speed * dt, |cell, current| {
            let chosen = choose_direction(maze, cell, current, target, fleeing);
            trace!(ghost = id, ?cell, ?chosen, fleeing, "Ghost decided");
            chosen
        });
    }
}

/// Picks the direction a ghost takes from an aligned `cell`.
///
/// Walls are excluded, and so is the reverse of `current` unless it is the only
/// way out. Remaining candidates are ranked by the Manhattan distance from the
/// cell they lead to to `target`: closest first when hunting, farthest first
/// when `fleeing`. Ties go to the earlier direction in declaration order.
/// Returns `None` only when every neighbour is a wall.
pub fn choose_direction(
    maze: &Maze,
    cell: IVec2,
    current: Option<Direction>,
    target: IVec2,
    fleeing: bool,
) -> Option<Direction> {
    let legal: SmallVec<[Direction; Direction::COUNT]> = Direction::iter()
        .filter(|direction| !maze.is_wall(cell + direction.as_ivec2()))
        .collect();

    let reverse = current.map(Direction::opposite);
    let mut candidates: SmallVec<[Direction; Direction::COUNT]> = legal.iter().copied().filter(|d| Some(*d) != reverse).collect();
    if candidates.is_empty() {
        candidates = legal;
    }

    let distance = |direction: &Direction| manhattan(cell + direction.as_ivec2(), target);
    if fleeing {
        candidates.into_iter().min_by_key(|direction| Reverse(distance(direction)))
    } else {
        candidates.into_iter().min_by_key(distance)
    }
}

/// Manhattan distance between two cells.
pub fn manhattan(a: IVec2, b: IVec2) -> i32 {
    let delta = (a - b).abs();
    delta.x + delta.y
}
