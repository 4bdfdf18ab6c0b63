//! Grid movement shared by the player and the ghosts.
//!
//! An agent is either [`Motion::Aligned`] on a cell center or
//! [`Motion::InTransit`] between two adjacent centers. A step hands the agent a
//! distance budget (`speed * dt`); the budget is spent cell by cell and any
//! overflow past a center carries into the next cell after the direction rule
//! has run. Agents therefore never skip an alignment point and never cross into
//! a wall.

use glam::{IVec2, Vec2};

use crate::map::direction::Direction;
use crate::map::maze::Maze;

/// Continuous position of the center of `cell`.
pub fn cell_center(cell: IVec2) -> Vec2 {
    cell.as_vec2() + Vec2::splat(0.5)
}

/// Integer cell of a continuous position, `round(pos - 0.5)`.
pub fn cell_of(position: Vec2) -> IVec2 {
    (position - Vec2::splat(0.5)).round().as_ivec2()
}

/// Where an agent is relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Sitting exactly on the center of `cell`.
    Aligned { cell: IVec2 },
    /// Travelling from the center of `from` to the center of the adjacent `to`.
    InTransit {
        from: IVec2,
        to: IVec2,
        /// Distance left to the center of `to`, in cells (`0 < remaining <= 1`)
        remaining: f32,
    },
}

impl Motion {
    /// Returns true when the agent sits on a cell center.
    pub fn is_aligned(&self) -> bool {
        matches!(self, Motion::Aligned { .. })
    }

    /// The continuous position of the agent.
    pub fn position(&self) -> Vec2 {
        match *self {
            Motion::Aligned { cell } => cell_center(cell),
            Motion::InTransit { from, to, remaining } => cell_center(to) - (to - from).as_vec2() * remaining,
        }
    }

    /// The integer cell used for pickups, derived from the continuous position.
    pub fn cell(&self) -> IVec2 {
        cell_of(self.position())
    }

    /// Spends `distance` moving towards the next center.
    ///
    /// Returns the unspent distance when the agent reaches the center (and becomes
    /// aligned), or `None` when the budget ran out mid-cell. Aligned agents are
    /// left untouched.
    pub fn tick(&mut self, distance: f32) -> Option<f32> {
        match *self {
            Motion::Aligned { .. } => None,
            Motion::InTransit { from, to, remaining } => {
                if distance >= remaining {
                    *self = Motion::Aligned { cell: to };
                    Some(distance - remaining)
                } else {
                    *self = Motion::InTransit {
                        from,
                        to,
                        remaining: remaining - distance,
                    };
                    None
                }
            }
        }
    }
}

/// A moving entity on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub motion: Motion,
    pub direction: Option<Direction>,
}

impl Agent {
    /// A new agent standing on the center of `cell`.
    pub fn spawn(cell: IVec2, direction: Option<Direction>) -> Self {
        Self {
            motion: Motion::Aligned { cell },
            direction,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position()
    }

    pub fn cell(&self) -> IVec2 {
        self.motion.cell()
    }

    pub fn is_aligned(&self) -> bool {
        self.motion.is_aligned()
    }

    /// Moves the agent along the grid by `distance` cells.
    ///
    /// Every time the agent sits on a center, `steer` is given the current cell
    /// and direction and returns the direction to take from here. The agent
    /// then continues if the next cell in that direction is walkable and stays
    /// on the center otherwise.
    pub fn advance<F>(&mut self, maze: &Maze, mut distance: f32, mut steer: F)
    where
        F: FnMut(IVec2, Option<Direction>) -> Option<Direction>,
    {
        loop {
            match self.motion {
                Motion::Aligned { cell } => {
                    self.direction = steer(cell, self.direction);
                    let Some(direction) = self.direction else {
                        break;
                    };
                    let next = cell + direction.as_ivec2();
                    if maze.is_wall(next) {
                        break;
                    }
                    self.motion = Motion::InTransit {
                        from: cell,
                        to: next,
                        remaining: 1.0,
                    };
                    if distance <= 0.0 {
                        break;
                    }
                }
                Motion::InTransit { .. } => match self.motion.tick(distance) {
                    Some(overflow) => distance = overflow,
                    None => break,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rounding() {
        assert_eq!(cell_of(Vec2::new(1.5, 1.5)), IVec2::new(1, 1));
        assert_eq!(cell_of(Vec2::new(1.9, 1.5)), IVec2::new(1, 1));
        assert_eq!(cell_of(Vec2::new(2.1, 1.5)), IVec2::new(2, 1));
    }

    #[test]
    fn test_motion_tick_partial() {
        let mut motion = Motion::InTransit {
            from: IVec2::new(1, 1),
            to: IVec2::new(2, 1),
            remaining: 1.0,
        };
        assert_eq!(motion.tick(0.25), None);
        assert_eq!(motion.position(), Vec2::new(1.75, 1.5));
    }

    #[test]
    fn test_motion_tick_overflow() {
        let mut motion = Motion::InTransit {
            from: IVec2::new(1, 1),
            to: IVec2::new(1, 2),
            remaining: 0.25,
        };
        let overflow = motion.tick(0.5).unwrap();
        assert!((overflow - 0.25).abs() < f32::EPSILON);
        assert_eq!(motion, Motion::Aligned { cell: IVec2::new(1, 2) });
    }
}
