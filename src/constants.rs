//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// Length of one simulation step.
pub const FIXED_STEP: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Upper bound on the wall-clock time a single frame may feed into the simulation.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(50);

/// Upper bound on the number of simulation steps run by a single frame.
pub const MAX_SUBSTEPS: u32 = 4;

/// The size of each cell, in logical pixels.
pub const TILE_SIZE: f32 = 22.0;

/// The size of the reference board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(21, 19);

/// Cell used for the player when the layout does not author one.
pub const DEFAULT_PLAYER_SPAWN: glam::IVec2 = glam::IVec2::new(1, 1);

/// Highest number of ghosts a session will ever run.
pub const MAX_GHOSTS: usize = 4;

/// Lives granted at the start of a run and after a game over.
pub const STARTING_LIVES: u8 = 3;

/// Squared distance, in cells, under which a ghost touches the player.
pub const COLLISION_DISTANCE_SQUARED: f32 = 0.2;

/// Seconds a power pellet keeps the ghosts frightened.
pub const FRIGHTENED_DURATION: f32 = 6.0;

pub mod score {
    /// Points for a regular pellet.
    pub const PELLET: u32 = 10;
    /// Points for a power pellet.
    pub const POWER_PELLET: u32 = 50;
    /// Points for eating a frightened ghost.
    pub const GHOST: u32 = 200;
    /// Bonus for clearing every collectible of a level.
    pub const LEVEL_CLEAR: u32 = 500;
}

pub mod speed {
    //! Default agent speeds, in cells per second.

    pub const PLAYER: f32 = 7.0;
    pub const GHOST: f32 = 6.0;
    pub const GHOST_FRIGHTENED: f32 = 5.0;
    /// Hunting speed gained per level above the first.
    pub const GHOST_PER_LEVEL: f32 = 0.25;
    /// Ceiling for the hunting speed ramp.
    pub const GHOST_MAX: f32 = 6.75;
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTile {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// Where the player starts. Walkable.
    PlayerSpawn,
    /// Where a ghost starts. Walkable.
    GhostSpawn,
}

impl MapTile {
    /// Returns true for tiles that start a level holding a collectible.
    pub const fn is_collectible(self) -> bool {
        matches!(self, MapTile::Pellet | MapTile::PowerPellet)
    }
}

/// The raw layout of the game board, as rows of characters.
///
/// `#` wall, `.` pellet, `o` power pellet, `P` player spawn, `G` ghost spawn, space empty.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "#####################",
    "#.........#.........#",
    "#.###.###.#.###.###.#",
    "#o# #.# #.#.# #.# #o#",
    "#.###.###.#.###.###.#",
    "#...................#",
    "#.###.#.#####.#.###.#",
    "#.....#...#...#.....#",
    "#####.### # ###.#####",
    "#####.#  GGG  #.#####",
    "#####.# ## ## #.#####",
    "#.........P.........#",
    "#.###.###.#.###.###.#",
    "#o..#..... .....#..o#",
    "###.#.#.#####.#.#.###",
    "#.....#...#...#.....#",
    "#.########.#.########",
    "#...................#",
    "#####################",
];
