//! The collectible set: pellets still on the board in the current level.

use glam::{IVec2, UVec2};

use crate::constants::score;
use crate::map::maze::Maze;

/// Kind of collectible picked up by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collectible {
    Pellet,
    PowerPellet,
}

impl Collectible {
    /// Points awarded when this collectible is eaten.
    pub const fn score_value(self) -> u32 {
        match self {
            Collectible::Pellet => score::PELLET,
            Collectible::PowerPellet => score::POWER_PELLET,
        }
    }
}

/// Flat presence map over the maze, indexed by `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collectibles {
    present: Vec<bool>,
    size: UVec2,
    remaining: usize,
    total: usize,
}

impl Collectibles {
    /// Fills the set with every pellet and power pellet authored in `maze`.
    pub fn from_maze(maze: &Maze) -> Self {
        let present: Vec<bool> = maze.cells().map(|(_, tile)| tile.is_collectible()).collect();
        let total = present.iter().filter(|&&present| present).count();
        Self {
            present,
            size: maze.size(),
            remaining: total,
            total,
        }
    }

    /// Puts every collectible back, as at the start of a level.
    pub fn refill(&mut self, maze: &Maze) {
        *self = Self::from_maze(maze);
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.size.x as i32 || cell.y >= self.size.y as i32 {
            return None;
        }
        Some(cell.y as usize * self.size.x as usize + cell.x as usize)
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        self.index(cell).is_some_and(|index| self.present[index])
    }

    /// Removes the collectible at `cell`, reporting what was there.
    pub fn take(&mut self, maze: &Maze, cell: IVec2) -> Option<Collectible> {
        let index = self.index(cell)?;
        if !self.present[index] {
            return None;
        }
        self.present[index] = false;
        self.remaining -= 1;
        Some(if maze.is_power_cell(cell) {
            Collectible::PowerPellet
        } else {
            Collectible::Pellet
        })
    }

    /// Number of collectibles still on the board.
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of collectibles at the start of a level.
    pub fn total(&self) -> usize {
        self.total
    }
}
